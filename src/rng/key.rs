//! Generator key material.
//!
//! A [`Key`] is the single 32-byte secret from which every stream is
//! derived. It is meant to be created once, persisted (typically as base64
//! text), and handed back to the generator on every call.

use std::fmt;

use crate::encoding::base64;
use crate::error::{Error, Result};

/// Length of a generator key in bytes.
pub const KEY_LEN: usize = 32;

/// 256-bit secret key for the block generator.
///
/// The type is fixed-size, so a `Key` can never hold the wrong amount of
/// material. Conversions from untrusted slices or text go through
/// [`Key::from_slice`] and [`Key::from_base64`].
///
/// Key bytes are wiped when the value is dropped, and `Debug` never prints
/// them.
#[derive(Clone)]
pub struct Key([u8; KEY_LEN]);

impl Key {
    /// Builds a key from a byte slice.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless `bytes` is exactly
    /// [`KEY_LEN`] bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidKeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        })?;

        Ok(Self(bytes))
    }

    /// Decodes a key previously produced by [`Key::to_base64`].
    pub fn from_base64(text: &str) -> Result<Self> {
        let mut bytes = base64::decode(text)?;
        let key = Self::from_slice(&bytes);
        bytes.fill(0);

        key
    }

    /// Encodes the key as standard padded base64 (44 characters).
    pub fn to_base64(&self) -> String {
        base64::encode(&self.0)
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Key {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; KEY_LEN]> for Key {
    fn from(bytes: &[u8; KEY_LEN]) -> Self {
        Self(*bytes)
    }
}

impl PartialEq for Key {
    /// Constant-time comparison.
    ///
    /// All bytes are XORed and accumulated before the final test, so the
    /// running time does not depend on where the first difference is.
    fn eq(&self, other: &Self) -> bool {
        let diff = self
            .0
            .iter()
            .zip(&other.0)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        diff == 0
    }
}

impl Eq for Key {}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key(..)")
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.0.fill(0);
    }
}
