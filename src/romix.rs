//! The sequential-memory-hard mixing functions BlockMix and SMix.
//!
//! Both operate on "mix blocks" of `128 * r` bytes, viewed as `2 * r`
//! contiguous 64-byte Salsa20/8 blocks.

use crate::salsa::{self, BLOCK_SIZE};

/// Replaces the mix block `b` with BlockMix(b), using `y` as working
/// storage of the same length.
///
/// The Salsa20/8 feedback chain is written to `y` in order; the chain
/// outputs are then permuted back into `b` with the even-indexed
/// sub-blocks first and the odd-indexed sub-blocks after them.
pub(crate) fn block_mix(b: &mut [u8], y: &mut [u8]) {
    debug_assert_eq!(b.len(), y.len());

    let mut x: [u8; BLOCK_SIZE] = b[b.len() - BLOCK_SIZE..].try_into().unwrap();

    for (chunk, out) in b
        .chunks_exact(BLOCK_SIZE)
        .zip(y.chunks_exact_mut(BLOCK_SIZE))
    {
        xor(&mut x, chunk);
        salsa::salsa20_8(&mut x);
        out.copy_from_slice(&x);
    }

    let half = b.len() / 2;
    for (i, chunk) in y.chunks_exact(BLOCK_SIZE).enumerate() {
        let pos = (i / 2) * BLOCK_SIZE + (i % 2) * half;
        b[pos..pos + BLOCK_SIZE].copy_from_slice(chunk);
    }
}

/// Index drawn from the first eight bytes of the last 64-byte sub-block,
/// decoded little-endian and reduced mod `n`. `n` is a power of two, so
/// `n - 1` is a bit mask.
fn integerify(b: &[u8], n: usize) -> usize {
    let tail = &b[b.len() - BLOCK_SIZE..];
    let j = u64::from_le_bytes(tail[..8].try_into().unwrap());
    (j & (n as u64 - 1)) as usize
}

/// Replaces the mix block `b` with SMix(b, n).
///
/// `v` is the `n`-entry checkpoint table (`b.len() * n` bytes) and `xy`
/// holds the two adjacent working blocks X and Y (`2 * b.len()` bytes).
/// Both are plain scratch: their prior contents do not matter and they
/// are reused across calls.
pub(crate) fn smix(b: &mut [u8], n: usize, v: &mut [u8], xy: &mut [u8]) {
    let len = b.len();
    let (x, y) = xy.split_at_mut(len);

    x.copy_from_slice(b);

    for chunk in v.chunks_exact_mut(len) {
        chunk.copy_from_slice(x);
        block_mix(x, y);
    }

    for _ in 0..n {
        let j = integerify(x, n);
        xor(x, &v[j * len..(j + 1) * len]);
        block_mix(x, y);
    }

    b.copy_from_slice(x);
}

fn xor(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
