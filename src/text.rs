use crate::error::{CfResult, CipherError};

/// Reduces free-form input to the uppercase letter stream the cipher works on.
/// Whitespace, digits, punctuation and non-ASCII characters are dropped.
pub fn normalize(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_alphabetic)
        .map(|b| b.to_ascii_uppercase())
        .collect()
}

pub fn is_letters(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_uppercase)
}

/// Rejects anything outside `A..=Z`.
pub fn ensure_letters(text: &[u8]) -> CfResult<()> {
    match text.iter().position(|b| !b.is_ascii_uppercase()) {
        None => Ok(()),
        Some(pos) => Err(CipherError::InvalidText(format!(
            "byte {:#04x} at offset {} is not an uppercase letter",
            text[pos], pos
        ))),
    }
}
