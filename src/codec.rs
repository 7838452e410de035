//! Base64 helpers for Unicode text.
//!
//! Text is encoded as its UTF-8 bytes with the standard alphabet. Decoding is
//! lenient about padding and trailing bits but strict about UTF-8.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::error::Result;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

pub fn b64_encode_unicode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode base64 into UTF-8 text.
///
/// Whitespace in the input is ignored. Fails on characters outside the
/// alphabet or when the decoded bytes are not valid UTF-8.
pub fn b64_decode_unicode(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = LENIENT.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
