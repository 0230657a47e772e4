//! Random number generation module
//!
//! This module provides deterministic, seekable randomness built on the
//! 8-round ChaCha block function.
//!
//! One 32-byte [`Key`] yields 2^64 independent streams, each selected by a
//! 64-bit stream identifier. Every stream is addressed in 64-byte blocks,
//! and any block can be computed directly from `(key, stream_id, pos)`
//! without touching the blocks before it.
//!
//! - [`generate`] is the stateless block function.
//! - [`StreamRng`] is a byte/word cursor over one stream, for callers who
//!   do not want to track block offsets themselves.

/// Design goals:
/// - Pure block function, no hidden state
/// - Constant-time seeking within a stream
/// - Bit-compatible state layout with other ChaCha8 stream generators
/// - No heap allocation
pub mod chacha;
mod key;
mod stream;

pub use chacha::{BLOCK_BYTES, BLOCK_WORDS, OutputBlock, ROUNDS, generate, generate_bytes};
pub use key::{KEY_LEN, Key};
pub use stream::StreamRng;
