//! Error types.

use core::fmt;

/// Reason a parameter set or requested key length was rejected.
///
/// Returned by [`Params::new`][crate::Params::new] and, wrapped in
/// [`Error::InvalidParams`], by the derivation entry points.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidParams {
    /// `N` is not a power of two greater than one.
    CostN,
    /// `r` or `p` is zero.
    CostRp,
    /// The parameters call for buffers past the allocation guard.
    TooLarge,
    /// The requested key length exceeds `(2³² - 1) * 32` bytes.
    OutputLen,
}

impl fmt::Display for InvalidParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CostN => "N must be > 1 and a power of 2",
            Self::CostRp => "r and p must be positive",
            Self::TooLarge => "parameters are too large",
            Self::OutputLen => "derived key length is out of range",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidParams {}

/// Errors returned by [`scrypt`][crate::scrypt] and
/// [`derive_key`][crate::derive_key].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The parameters failed validation.
    InvalidParams(InvalidParams),
    /// A scratch buffer could not be allocated.
    AllocFailed,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams(reason) => write!(f, "scrypt: {}", reason),
            Self::AllocFailed => f.write_str("scrypt: scratch allocation failed"),
        }
    }
}

impl From<InvalidParams> for Error {
    fn from(reason: InvalidParams) -> Self {
        Self::InvalidParams(reason)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
