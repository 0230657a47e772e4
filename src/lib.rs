//! Seekable deterministic randomness from a single key
//!
//! This crate provides a small set of primitives for applications that need
//! many independent, reproducible random number generators while persisting
//! as little state as possible.
//!
//! One 32-byte secret key is enough to derive 2^64 independent pseudo-random
//! streams. Each stream is selected by a 64-bit identifier and can be read
//! from any position in constant time, so a generator is fully described by
//! `(stream_id, position)` once the key is known.
//!
//! # Module overview
//!
//! - `rng`
//!   The 8-round ChaCha block function ([`rng::generate`]), the [`Key`]
//!   type, and [`StreamRng`], a word/byte cursor over a single stream.
//!
//! - `encoding`
//!   Standard base64 encoding, decoding and character-set validation, used
//!   to store keys and other opaque buffers as text.
//!
//! - `error`
//!   The crate-wide [`Error`] type.
//!
//! # Design goals
//!
//! - Pure, stateless core functions
//! - No secret-dependent branches or table lookups in the generator
//! - A fixed, documented output format shared with other ChaCha8 stream
//!   generators
//!
//! The generator uses the reduced 8-round ChaCha permutation. It is meant
//! for reproducible simulation and game randomness, not for encryption or
//! authentication.

pub mod encoding;
pub mod error;
pub mod rng;

pub use error::{Error, Result};
pub use rng::{Key, StreamRng};
