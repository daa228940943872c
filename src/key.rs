use crate::consts::{ALPHABET, ALPHABET_SIZE};
use crate::error::{CfResult, CipherError};
use crate::ngram::letter_index;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A substitution key: plaintext letter `i` encrypts to ciphertext letter
/// `key[i]`. Always a permutation of `0..26`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Key([u8; ALPHABET_SIZE]);

impl Key {
    pub const fn identity() -> Self {
        let mut out = [0u8; ALPHABET_SIZE];
        let mut i = 0;
        while i < ALPHABET_SIZE {
            out[i] = i as u8;
            i += 1;
        }
        Key(out)
    }

    /// Caesar shift: every letter moves `shift` places down the alphabet.
    pub fn caesar(shift: u8) -> Self {
        let mut out = [0u8; ALPHABET_SIZE];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = ((i + shift as usize) % ALPHABET_SIZE) as u8;
        }
        Key(out)
    }

    /// Wraps a raw mapping after checking it is a bijection.
    pub fn from_array(map: [u8; ALPHABET_SIZE]) -> CfResult<Self> {
        let key = Key(map);
        key.validate()?;
        Ok(key)
    }

    /// Parses the 26-letter alphabet form, e.g. `QWERTYUIOPASDFGHJKLZXCVBNM`.
    /// Lowercase letters are accepted.
    pub fn from_alphabet(s: &str) -> CfResult<Self> {
        let bytes = s.trim().as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            return Err(CipherError::InvalidKey(format!(
                "expected {} letters, got {}",
                ALPHABET_SIZE,
                bytes.len()
            )));
        }
        let mut map = [0u8; ALPHABET_SIZE];
        for (slot, &b) in map.iter_mut().zip(bytes) {
            if !b.is_ascii_alphabetic() {
                return Err(CipherError::InvalidKey(format!(
                    "'{}' is not a letter",
                    b as char
                )));
            }
            *slot = letter_index(b.to_ascii_uppercase()) as u8;
        }
        Self::from_array(map)
    }

    pub fn to_alphabet(&self) -> String {
        self.0.iter().map(|&c| (b'A' + c) as char).collect()
    }

    /// Checks the bijection invariant: every index in `0..26` exactly once.
    pub fn validate(&self) -> CfResult<()> {
        let mut seen = [false; ALPHABET_SIZE];
        for (pos, &c) in self.0.iter().enumerate() {
            let c = c as usize;
            if c >= ALPHABET_SIZE {
                return Err(CipherError::InvalidKey(format!(
                    "entry {} at position {} is out of range",
                    c, pos
                )));
            }
            if seen[c] {
                return Err(CipherError::InvalidKey(format!(
                    "letter {} is mapped twice",
                    &ALPHABET[c..c + 1]
                )));
            }
            seen[c] = true;
        }
        Ok(())
    }

    pub fn is_bijection(&self) -> bool {
        self.validate().is_ok()
    }

    #[inline(always)]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.0.swap(a, b);
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[u8; ALPHABET_SIZE] {
        &self.0
    }

    pub(crate) fn as_mut_array(&mut self) -> &mut [u8; ALPHABET_SIZE] {
        &mut self.0
    }

    /// The decrypt key: `inverse()[key[i]] == i`.
    #[inline(always)]
    pub fn inverse(&self) -> Key {
        let mut out = [0u8; ALPHABET_SIZE];
        for (plain, &cipher) in self.0.iter().enumerate() {
            out[cipher as usize] = plain as u8;
        }
        Key(out)
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        plaintext
            .iter()
            .map(|&p| b'A' + self.0[letter_index(p)])
            .collect()
    }

    /// Decrypts into a caller-owned buffer of the same length, so the search
    /// loop never allocates.
    #[inline(always)]
    pub fn decrypt_into(&self, ciphertext: &[u8], plaintext: &mut [u8]) {
        debug_assert_eq!(ciphertext.len(), plaintext.len());
        let decrypt_key = self.inverse();
        for (out, &c) in plaintext.iter_mut().zip(ciphertext) {
            *out = b'A' + decrypt_key.0[letter_index(c)];
        }
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; ciphertext.len()];
        self.decrypt_into(ciphertext, &mut out);
        out
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_alphabet())
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key({})", self.to_alphabet())
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> CfResult<Self> {
        Self::from_alphabet(s)
    }
}

impl TryFrom<String> for Key {
    type Error = CipherError;

    fn try_from(s: String) -> CfResult<Self> {
        Self::from_alphabet(&s)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_alphabet()
    }
}
