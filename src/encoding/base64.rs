//! Standard base64 (RFC 4648, section 4) with `=` padding.
//!
//! Used to turn opaque binary material, such as generator keys, into text
//! that can be stored next to other configuration or save data.
//!
//! Decoding is strict:
//! - the input length must be a multiple of 4,
//! - every character must belong to the alphabet,
//! - `=` may only fill the last one or two positions of the final quartet.
//!
//! [`is_valid_base64`] is a weaker, purely syntactic check over the
//! character set; it says nothing about padding placement or length.

use log::trace;

use crate::error::{Error, Result};

/// Base64 alphabet, indexed by sextet value.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
const PAD: u8 = b'=';

/// Returns `true` if `c` is a base64 alphabet character or `=`.
///
/// Only the 64 alphabet characters and the padding character are
/// accepted. The ASCII punctuation lying between `Z` and `a`
/// (`[ \ ] ^ _` and the backtick) is rejected.
#[inline]
pub fn is_valid_base64_char(c: u8) -> bool {
    matches!(c, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'+' | b'/' | PAD)
}

/// Returns `true` if every character of `text` passes
/// [`is_valid_base64_char`].
///
/// The empty string is valid.
pub fn is_valid_base64(text: &str) -> bool {
    text.bytes().all(is_valid_base64_char)
}

/// Length of the encoding of `n` input bytes.
#[inline]
pub fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Upper bound on the number of bytes `text` decodes to.
///
/// Exact for unpadded input; one or two bytes too large otherwise.
#[inline]
pub fn decoded_len(text: &str) -> usize {
    text.len() / 4 * 3
}

/// Encodes `bytes` as padded base64.
///
/// The output length is always [`encoded_len`]`(bytes.len())`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(bytes.len()));

    for chunk in bytes.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        out.push(sextet_char(b0 >> 2));
        out.push(sextet_char(((b0 & 0x03) << 4) | (b1 >> 4)));

        if chunk.len() > 1 {
            out.push(sextet_char(((b1 & 0x0f) << 2) | (b2 >> 6)));
        } else {
            out.push(PAD as char);
        }

        if chunk.len() > 2 {
            out.push(sextet_char(b2 & 0x3f));
        } else {
            out.push(PAD as char);
        }
    }

    out
}

/// Decodes padded base64 text.
///
/// # Errors
/// - [`Error::InvalidBase64Length`] if `text.len()` is not a multiple of 4.
/// - [`Error::InvalidBase64Character`] for any byte outside the alphabet.
/// - [`Error::InvalidBase64Padding`] if `=` appears anywhere but the last
///   one or two positions.
///
/// Unused low bits of a padded final quartet are ignored.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let input = text.as_bytes();

    if input.len() % 4 != 0 {
        trace!("base64: rejecting input of length {}", input.len());
        return Err(Error::InvalidBase64Length { len: input.len() });
    }

    if let Some(index) = input.iter().position(|&c| !is_valid_base64_char(c)) {
        // Every byte before `index` is ASCII, so `index` is a char boundary.
        let ch = text[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
        trace!("base64: invalid character {ch:?} at offset {index}");
        return Err(Error::InvalidBase64Character { ch, index });
    }

    // Everything after the first `=` must be padding too, and there may be
    // at most two of them.
    let data_len = input.iter().position(|&c| c == PAD).unwrap_or(input.len());
    let padding = &input[data_len..];

    if let Some(offset) = padding.iter().position(|&c| c != PAD) {
        trace!("base64: data after padding at offset {}", data_len + offset);
        return Err(Error::InvalidBase64Padding { index: data_len });
    }

    if padding.len() > 2 {
        trace!("base64: {} padding characters", padding.len());
        return Err(Error::InvalidBase64Padding { index: data_len });
    }

    let sextets: Vec<u8> = input[..data_len].iter().filter_map(|&c| sextet_value(c)).collect();

    let mut out = Vec::with_capacity(decoded_len(text));

    for quartet in sextets.chunks(4) {
        let s0 = quartet[0];
        let s1 = quartet[1];

        out.push((s0 << 2) | (s1 >> 4));

        if let Some(&s2) = quartet.get(2) {
            out.push((s1 << 4) | (s2 >> 2));

            if let Some(&s3) = quartet.get(3) {
                out.push((s2 << 6) | s3);
            }
        }
    }

    Ok(out)
}

/// Maps a sextet (`0..64`) to its alphabet character.
#[inline(always)]
fn sextet_char(value: u8) -> char {
    ALPHABET[usize::from(value & 0x3f)] as char
}

/// Maps an alphabet character back to its sextet.
#[inline(always)]
fn sextet_value(c: u8) -> Option<u8> {
    match c {
        b'A'..=b'Z' => Some(c - b'A'),
        b'a'..=b'z' => Some(c - b'a' + 26),
        b'0'..=b'9' => Some(c - b'0' + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}
