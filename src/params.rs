//! scrypt cost parameters.

use crate::errors::InvalidParams;

/// Allocation guard: every byte count the derivation sizes must stay
/// within a signed 32-bit value, so the buffers remain addressable on
/// 32-bit hosts.
const MAX_INT: u64 = i32::MAX as u64;

/// The scrypt cost parameters `N`, `r` and `p`.
///
/// `N` is the CPU/memory cost (a power of two greater than one), `r` the
/// block size multiplier and `p` the parallelization factor. A `Params`
/// value is only constructible through [`Params::new`], so holding one
/// guarantees the buffer size products `128 * r`, `256 * r`,
/// `128 * r * N` and `p * 128 * r` are all sound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Params {
    n: u32,
    r: u32,
    p: u32,
}

impl Params {
    /// Parameters recommended for interactive logins: `N` = 16384,
    /// `r` = 8, `p` = 1 (roughly 16 MiB of scratch memory).
    pub const RECOMMENDED: Self = Self {
        n: 1 << 14,
        r: 8,
        p: 1,
    };

    /// Validates and returns a parameter set.
    ///
    /// The checks run in a 64-bit width before anything is allocated:
    /// `r * p` must stay below 2³⁰ and each of the buffer dimensions must
    /// stay within the `MAX_INT` guard.
    pub fn new(n: u32, r: u32, p: u32) -> Result<Self, InvalidParams> {
        if n < 2 || !n.is_power_of_two() {
            return Err(InvalidParams::CostN);
        }
        if r == 0 || p == 0 {
            return Err(InvalidParams::CostRp);
        }

        let (n64, r64, p64) = (u64::from(n), u64::from(r), u64::from(p));
        if r64 * p64 >= 1 << 30
            || r64 > MAX_INT / 128 / p64
            || r64 > MAX_INT / 256
            || n64 > MAX_INT / 128 / r64
        {
            return Err(InvalidParams::TooLarge);
        }

        Ok(Self { n, r, p })
    }

    /// The CPU/memory cost parameter `N`.
    pub const fn n(&self) -> u32 {
        self.n
    }

    /// The block size multiplier `r`.
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// The parallelization factor `p`.
    pub const fn p(&self) -> u32 {
        self.p
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::RECOMMENDED
    }
}
