//! The Salsa20/8 core function.
//!
//! Salsa20/8 is the Salsa20 permutation reduced to 8 rounds. scrypt uses
//! it as a mixing function, not as a cipher: there is no key schedule and
//! no "expand 32-byte k" constants, the 64-byte block is the whole state.

/// Size of a Salsa20 block in bytes
pub(crate) const BLOCK_SIZE: usize = 64;

/// Number of 32-bit words in the Salsa20 state
const STATE_WORDS: usize = 16;

/// Number of (column, diagonal) double rounds making up the 8 rounds
const DOUBLE_ROUNDS: usize = 4;

/// Applies Salsa20/8 to `block` in place.
///
/// The block is read as sixteen little-endian words, permuted, and the
/// permuted words are added back onto the input words before re-encoding.
pub(crate) fn salsa20_8(block: &mut [u8; BLOCK_SIZE]) {
    let mut state = [0u32; STATE_WORDS];
    for (val, chunk) in state.iter_mut().zip(block.chunks_exact(4)) {
        *val = u32::from_le_bytes(chunk.try_into().unwrap());
    }

    let res = run_rounds(&state);

    for (chunk, val) in block.chunks_exact_mut(4).zip(res.iter()) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }
}

#[inline]
#[allow(clippy::many_single_char_names)]
fn quarter_round(a: usize, b: usize, c: usize, d: usize, state: &mut [u32; STATE_WORDS]) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

#[inline(always)]
fn run_rounds(state: &[u32; STATE_WORDS]) -> [u32; STATE_WORDS] {
    let mut res = *state;

    for _ in 0..DOUBLE_ROUNDS {
        // column rounds
        quarter_round(0, 4, 8, 12, &mut res);
        quarter_round(5, 9, 13, 1, &mut res);
        quarter_round(10, 14, 2, 6, &mut res);
        quarter_round(15, 3, 7, 11, &mut res);

        // diagonal rounds
        quarter_round(0, 1, 2, 3, &mut res);
        quarter_round(5, 6, 7, 4, &mut res);
        quarter_round(10, 11, 8, 9, &mut res);
        quarter_round(15, 12, 13, 14, &mut res);
    }

    for (s1, s0) in res.iter_mut().zip(state.iter()) {
        *s1 = s1.wrapping_add(*s0);
    }
    res
}
