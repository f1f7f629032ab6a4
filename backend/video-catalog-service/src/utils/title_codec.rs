//! Reversible mapping between a video title and the path segment that
//! identifies it (`/video/{segment}`).
//!
//! Titles are percent-encoded over their UTF-8 bytes. Everything outside the
//! unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped, so `+` and space are
//! distinct on the wire (`%2B` and `%20`).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleCodecError {
    #[error("Title cannot be decoded from UTF-8")]
    InvalidEncoding,

    #[error("Video title cannot be encoded into UTF-8")]
    Unencodable,
}

pub fn encode(title: &str) -> Result<String, TitleCodecError> {
    if title.is_empty() {
        return Err(TitleCodecError::Unencodable);
    }
    Ok(urlencoding::encode(title).into_owned())
}

pub fn decode(segment: &str) -> Result<String, TitleCodecError> {
    if !has_well_formed_escapes(segment.as_bytes()) {
        return Err(TitleCodecError::InvalidEncoding);
    }

    urlencoding::decode(segment)
        .map(|title| title.into_owned())
        .map_err(|_| TitleCodecError::InvalidEncoding)
}

// urlencoding passes a stray `%` through untouched; a title segment must not
// contain one.
fn has_well_formed_escapes(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}
