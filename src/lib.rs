//! The scrypt key derivation function.
//!
//! scrypt is the sequential-memory-hard password-based KDF specified in
//! Colin Percival's paper "Stronger Key Derivation via Sequential
//! Memory-Hard Functions" and in RFC 7914. Deriving a key requires both
//! CPU work and a large, randomly-addressed working memory, which makes
//! brute-force attacks on low-entropy passwords expensive on specialized
//! hardware.
//!
//! The derivation expands the password with one round of
//! PBKDF2-HMAC-SHA256, mixes each of the `p` resulting blocks with the
//! memory-hard SMix function, and contracts the mixed blocks with a
//! second PBKDF2-HMAC-SHA256 round into the final key.
//!
//! # Usage
//!
//! ```
//! use scrypt::{derive_key, Params};
//!
//! // First test vector from RFC 7914 section 12
//! let params = Params::new(16, 1, 1)?;
//! let key = derive_key(b"", b"", &params, 64)?;
//!
//! assert_eq!(key[..4], [0x77, 0xd6, 0x57, 0x62]);
//! # Ok::<(), scrypt::Error>(())
//! ```
//!
//! For real passwords use [`Params::RECOMMENDED`] (or stronger) together
//! with a random salt.

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod errors;
mod params;
mod romix;
mod salsa;

pub use crate::{
    errors::{Error, InvalidParams},
    params::Params,
};

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Derives a key from `password` and `salt` into the caller-provided
/// `output` buffer.
///
/// The derived key fills `output` exactly; its length is the `keyLen` of
/// RFC 7914 and may be zero (in which case nothing is written). The
/// `p` SMix passes share one checkpoint table and one pair of working
/// blocks, so a call consumes roughly `128 * r * (N + p) + 256 * r`
/// bytes of heap.
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    output: &mut [u8],
) -> Result<(), Error> {
    // keyLen <= (2^32 - 1) * hLen, hLen being 32 for HMAC-SHA256
    if output.len() / 32 > u32::MAX as usize {
        return Err(InvalidParams::OutputLen.into());
    }

    let r128 = 128 * params.r() as usize;

    let mut xy = Scratch::zeroed(2 * r128)?;
    let mut v = Scratch::zeroed(r128 * params.n() as usize)?;
    let mut b = Scratch::zeroed(r128 * params.p() as usize)?;

    pbkdf2_hmac::<Sha256>(password, salt, 1, &mut b);

    for chunk in b.chunks_exact_mut(r128) {
        romix::smix(chunk, params.n() as usize, &mut v, &mut xy);
    }

    pbkdf2_hmac::<Sha256>(password, &b, 1, output);

    Ok(())
}

/// Derives `key_len` bytes from `password` and `salt`, returning them as
/// a freshly allocated vector.
///
/// Equivalent to [`scrypt`] with a `key_len`-byte output buffer.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    params: &Params,
    key_len: usize,
) -> Result<Vec<u8>, Error> {
    let mut output = try_alloc(key_len)?;
    scrypt(password, salt, params, &mut output)?;
    Ok(output)
}

/// Allocates a zero-filled buffer, surfacing allocation failure as
/// [`Error::AllocFailed`] instead of aborting.
fn try_alloc(len: usize) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len).map_err(|_| Error::AllocFailed)?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Password-derived heap scratch (the `B`, `V` and `XY` buffers).
struct Scratch(Vec<u8>);

impl Scratch {
    fn zeroed(len: usize) -> Result<Self, Error> {
        try_alloc(len).map(Self)
    }
}

impl Deref for Scratch {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl DerefMut for Scratch {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Scratch {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for Scratch {}
