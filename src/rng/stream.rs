//! Seekable random stream on top of the block function.
//!
//! [`StreamRng`] is a cursor over one `(key, stream_id)` stream. Its only
//! evolving state is a word position, so a host can persist
//! `(stream_id, word_position)` and later resume exactly where it stopped
//! by handing the same key back in.

use std::fmt;

use log::trace;

use crate::rng::chacha::{BLOCK_WORDS, OutputBlock, generate};
use crate::rng::key::Key;

/// Number of addressable words in one stream (2^64 blocks of 16 words).
const WORD_POSITION_MODULUS: u128 = 1 << 68;

/// Deterministic, seekable random stream.
///
/// Output is consumed one 32-bit word at a time. A stream is fully
/// determined by its key and stream identifier, and any position in it can
/// be reached in constant time with [`StreamRng::seek`] or
/// [`StreamRng::set_word_position`].
#[derive(Clone)]
pub struct StreamRng {
    /// Generator key
    key: Key,

    /// Selected stream
    stream_id: u64,

    /// Block holding the next output word
    block: u64,

    /// Offset of the next output word within `block`
    index: usize,

    /// Cached output of `block`, valid when `buffered` is set
    buf: OutputBlock,
    buffered: bool,
}

impl StreamRng {
    /// Creates a cursor at the start of stream `stream_id`.
    pub fn new(key: Key, stream_id: u64) -> Self {
        Self::with_position(key, stream_id, 0, 0)
    }

    /// Creates a cursor at word `word` of block `block`.
    ///
    /// `word` is reduced modulo the block size.
    pub fn with_position(key: Key, stream_id: u64, block: u64, word: usize) -> Self {
        Self {
            key,
            stream_id,
            block,
            index: word % BLOCK_WORDS,
            buf: [0u32; BLOCK_WORDS],
            buffered: false,
        }
    }

    /// Stream identifier this cursor reads from.
    pub fn stream_id(&self) -> u64 {
        self.stream_id
    }

    /// Block holding the next output word.
    pub fn block_position(&self) -> u64 {
        self.block
    }

    /// Absolute position of the next output word in the stream.
    pub fn word_position(&self) -> u128 {
        u128::from(self.block) * BLOCK_WORDS as u128 + self.index as u128
    }

    /// Moves the cursor to the first word of block `block`.
    pub fn seek(&mut self, block: u64) {
        trace!("stream {:#x}: seek to block {block}", self.stream_id);

        self.block = block;
        self.index = 0;
        self.buffered = false;
    }

    /// Moves the cursor to an absolute word position.
    ///
    /// Positions wrap modulo 2^68, the length of a stream in words.
    pub fn set_word_position(&mut self, position: u128) {
        let position = position % WORD_POSITION_MODULUS;
        trace!("stream {:#x}: seek to word {position}", self.stream_id);

        self.block = (position / BLOCK_WORDS as u128) as u64;
        self.index = (position % BLOCK_WORDS as u128) as usize;
        self.buffered = false;
    }

    /// Returns the next 32-bit word of the stream.
    pub fn next_u32(&mut self) -> u32 {
        self.refill();

        let word = self.buf[self.index];
        self.advance(1);

        word
    }

    /// Returns the next 64 bits of the stream, low word first.
    pub fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_u32());
        let hi = u64::from(self.next_u32());

        (hi << 32) | lo
    }

    /// Fills `out` with stream bytes.
    ///
    /// Words are serialized little-endian. Output is consumed in whole
    /// words: when `out.len()` is not a multiple of 4, the unused tail of
    /// the last word is discarded.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            self.refill();

            let available = &self.buf[self.index..];
            let words = (out.len() - offset).div_ceil(4).min(available.len());

            for word in &available[..words] {
                let bytes = word.to_le_bytes();
                let take = 4usize.min(out.len() - offset);

                out[offset..offset + take].copy_from_slice(&bytes[..take]);
                offset += take;
            }

            self.advance(words);
        }
    }

    /// Computes the current block if it is not cached yet.
    #[inline]
    fn refill(&mut self) {
        if !self.buffered {
            self.buf = generate(&self.key, self.stream_id, self.block);
            self.buffered = true;
        }
    }

    /// Consumes `words` words of the current block.
    #[inline]
    fn advance(&mut self, words: usize) {
        self.index += words;

        if self.index == BLOCK_WORDS {
            self.index = 0;
            self.block = self.block.wrapping_add(1);
            self.buffered = false;
        }
    }
}

impl fmt::Debug for StreamRng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamRng")
            .field("stream_id", &self.stream_id)
            .field("block", &self.block)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
