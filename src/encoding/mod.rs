//! Text encodings for binary material.
//!
//! Currently only standard padded base64 is provided. The URL-safe alphabet
//! is not supported.

pub mod base64;
