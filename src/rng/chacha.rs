//! ChaCha8 block function
//!
//! This module turns a 256-bit key, a 64-bit stream identifier and a 64-bit
//! block position into one 64-byte pseudo-random block. It is a pure
//! function: nothing is cached, nothing is stored, and every call is
//! independent of every other call.
//!
//! Only 8 rounds (4 double rounds) are applied. This is the reduced-round
//! ChaCha variant popularized as a fast PRNG core; it is **not** a
//! general-purpose cipher and must not be used for encryption.
//!
//! # State layout
//!
//! The 16-word input state is laid out as in the original ChaCha design
//! (64-bit block counter, 64-bit nonce):
//!
//! ```text
//!  0..4    "expand 32-byte k"
//!  4..12   key, little-endian words
//! 12, 13   pos        (low word, high word)
//! 14, 15   stream_id  (low word, high word)
//! ```
//!
//! This layout is part of the output contract. It is the same one used by
//! `rand_chacha::ChaCha8Rng`, so block `pos` of stream `stream_id` here is
//! word-for-word identical to that generator after `set_stream(stream_id)`
//! and `set_word_pos(pos * 16)`.

use crate::rng::key::Key;

/// Number of 32-bit words in one output block.
pub const BLOCK_WORDS: usize = 16;

/// Number of bytes in one output block.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 4;

/// Number of ChaCha rounds applied per block.
pub const ROUNDS: usize = 8;

/// One generated block, as sixteen native `u32` words.
pub type OutputBlock = [u32; BLOCK_WORDS];

/// ChaCha constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words.
const CHACHA_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one ChaCha quarter round.
///
/// Mixes four words of the state with addition modulo 2³², XOR and fixed
/// left rotations. Branchless.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the ChaCha permutation with `ROUNDS` rounds.
///
/// Each double round is one column pass followed by one diagonal pass.
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..ROUNDS / 2 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Builds the initial 16-word state for `(key, stream_id, pos)`.
#[inline]
fn initial_state(key: &Key, stream_id: u64, pos: u64) -> [u32; 16] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.as_bytes().chunks_exact(4))
        .for_each(|(s, k)| *s = u32::from_le_bytes([k[0], k[1], k[2], k[3]]));

    state[12] = pos as u32;
    state[13] = (pos >> 32) as u32;
    state[14] = stream_id as u32;
    state[15] = (stream_id >> 32) as u32;

    state
}

/// Generates block `pos` of stream `stream_id` under `key`.
///
/// Identical inputs always produce identical output. Distinct
/// `(stream_id, pos)` pairs map to distinct initial states, so every pair
/// addresses its own block; `pos + 1` is a fresh block, not a continuation
/// of `pos`.
///
/// The computation is a fixed sequence of additions, rotations and XORs;
/// there is no branching or indexing on key, stream or position values.
pub fn generate(key: &Key, stream_id: u64, pos: u64) -> OutputBlock {
    let mut state = initial_state(key, stream_id, pos);

    // Preserve original state for feed-forward
    let original = state;

    rounds(&mut state);

    state
        .iter_mut()
        .zip(&original)
        .for_each(|(s, o)| *s = s.wrapping_add(*o));

    state
}

/// Same as [`generate`], serialized as little-endian bytes.
///
/// Bytes `4 * i .. 4 * i + 4` hold word `i` of the block.
pub fn generate_bytes(key: &Key, stream_id: u64, pos: u64) -> [u8; BLOCK_BYTES] {
    let block = generate(key, stream_id, pos);

    let mut out = [0u8; BLOCK_BYTES];
    out.chunks_exact_mut(4)
        .zip(&block)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}
