use crate::consts::{ALPHABET_SIZE, MAX_NGRAM_LEN, QUADGRAM_LEN};
use crate::error::{CfResult, CipherError};

/// Maps an uppercase ASCII letter to its 0-based alphabet index.
/// Callers guarantee `b` is in `b'A'..=b'Z'`.
#[inline(always)]
pub fn letter_index(b: u8) -> usize {
    (b - b'A') as usize
}

/// Base-26 positional encoding between an n-letter sequence and a dense
/// index in `0..26^n`.
///
/// `ABCD` encodes to `0*26^3 + 1*26^2 + 2*26 + 3`. The encoding is used both
/// to build the fitness table and to address it while scoring, so the two
/// must never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgramEncoder {
    n: usize,
    // 26^(n-1): weight of the leading letter, dropped when the window rolls.
    lead_weight: usize,
    domain: usize,
}

impl NgramEncoder {
    pub fn new(n: usize) -> CfResult<Self> {
        if n == 0 || n > MAX_NGRAM_LEN {
            return Err(CipherError::Config(format!(
                "n-gram length must be between 1 and {}, got {}",
                MAX_NGRAM_LEN, n
            )));
        }
        let lead_weight = ALPHABET_SIZE.pow((n - 1) as u32);
        Ok(Self {
            n,
            lead_weight,
            domain: lead_weight * ALPHABET_SIZE,
        })
    }

    pub const fn quadgram() -> Self {
        let lead_weight = ALPHABET_SIZE.pow(QUADGRAM_LEN as u32 - 1);
        Self {
            n: QUADGRAM_LEN,
            lead_weight,
            domain: lead_weight * ALPHABET_SIZE,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of distinct indices (26^n).
    pub fn domain(&self) -> usize {
        self.domain
    }

    /// Encodes the first `n` letters of `letters`. No validation: the
    /// caller guarantees uppercase letters and `letters.len() >= n`.
    #[inline(always)]
    pub fn encode(&self, letters: &[u8]) -> usize {
        debug_assert!(letters.len() >= self.n);
        letters[..self.n]
            .iter()
            .fold(0, |acc, &b| acc * ALPHABET_SIZE + letter_index(b))
    }

    /// Slides a window one letter to the right: drops the leading letter of
    /// `prev` and appends `next`.
    #[inline(always)]
    pub fn roll(&self, prev: usize, next: u8) -> usize {
        (prev % self.lead_weight) * ALPHABET_SIZE + letter_index(next)
    }

    pub fn decode(&self, mut index: usize) -> String {
        let mut out = vec![b'A'; self.n];
        for slot in out.iter_mut().rev() {
            *slot = b'A' + (index % ALPHABET_SIZE) as u8;
            index /= ALPHABET_SIZE;
        }
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl Default for NgramEncoder {
    fn default() -> Self {
        Self::quadgram()
    }
}
