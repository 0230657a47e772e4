//! Error type shared by the generator and the codec.
//!
//! The block generator itself cannot fail: its inputs are fixed-size types.
//! Errors only arise at the edges, when key material arrives as an
//! arbitrary byte slice or when base64 text has to be decoded.

/// Errors returned by fallible operations of this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Key material does not have the required length.
    #[error("invalid key length (expected {expected} bytes, got {actual})")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Base64 input length is not a multiple of 4.
    #[error("invalid base64 length {len} (must be a multiple of 4)")]
    InvalidBase64Length { len: usize },

    /// Base64 input contains a byte outside the alphabet.
    #[error("invalid base64 character {ch:?} at offset {index}")]
    InvalidBase64Character { ch: char, index: usize },

    /// `=` appears somewhere other than the tail of the final quartet.
    #[error("misplaced base64 padding at offset {index}")]
    InvalidBase64Padding { index: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
