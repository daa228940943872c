pub mod loader;

use self::loader::RawCorpus;
use crate::config::FitnessParams;
use crate::error::{CfResult, CipherError};
use crate::ngram::NgramEncoder;
use crate::text::{ensure_letters, is_letters};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Quadgram language model.
///
/// Holds a dense `26^n` table of log10 probabilities and a reference
/// baseline (the mean log-probability of the most frequent corpus entries).
/// A text's score is how far its average per-window log-probability sits
/// from that baseline, so typical English lands near zero and gibberish
/// lands far from it.
///
/// The table is never written after construction; share the model across
/// searches with `Arc`.
pub struct FitnessModel {
    encoder: NgramEncoder,
    // Flat array indexed by `NgramEncoder::encode`; no hashing in the hot path.
    table: Box<[f32]>,
    baseline: f32,
    floor: f32,
    entries: usize,
    total: u64,
}

impl FitnessModel {
    pub fn from_reader<R: Read>(reader: R, params: &FitnessParams) -> CfResult<Self> {
        let corpus = loader::read_corpus(reader)?;
        Self::from_corpus(&corpus, params)
    }

    pub fn from_path<P: AsRef<Path>>(path: P, params: &FitnessParams) -> CfResult<Self> {
        let path = path.as_ref();
        info!("📚 Loading corpus: {}", path.display());
        let corpus = loader::load_corpus(path)?;
        Self::from_corpus(&corpus, params)
    }

    pub fn from_corpus(corpus: &RawCorpus, params: &FitnessParams) -> CfResult<Self> {
        params.validate()?;
        if corpus.entries.is_empty() {
            return Err(CipherError::EmptyCorpus);
        }

        let encoder = NgramEncoder::new(corpus.n)?;
        // In-memory corpora skip the loader's checks; `line` is the 1-based entry.
        for (i, entry) in corpus.entries.iter().enumerate() {
            let token = entry.ngram.as_bytes();
            if token.len() != corpus.n || !is_letters(token) {
                return Err(CipherError::CorpusFormat {
                    line: i + 1,
                    reason: format!(
                        "'{}' is not a {}-letter uppercase n-gram",
                        entry.ngram, corpus.n
                    ),
                });
            }
            if entry.count == 0 {
                return Err(CipherError::CorpusFormat {
                    line: i + 1,
                    reason: format!("count for '{}' is zero", entry.ngram),
                });
            }
        }

        let floor_log = (params.floor_percentage as f64).log10() as f32;
        let mut table = vec![floor_log; encoder.domain()].into_boxed_slice();

        let mut total: u64 = 0;
        let mut reference = Vec::with_capacity(params.reference_top_k.min(corpus.entries.len()));

        for entry in &corpus.entries {
            let idx = encoder.encode(entry.ngram.as_bytes());
            table[idx] = (entry.count as f64).log10() as f32;
            total = total.saturating_add(entry.count);
            if reference.len() < params.reference_top_k {
                reference.push(idx);
            }
        }

        // log(count / total) = log(count) - log(total)
        let norm = (total as f64).log10() as f32;
        for v in table.iter_mut() {
            *v -= norm;
        }

        let baseline = reference.iter().map(|&idx| table[idx]).sum::<f32>() / reference.len() as f32;

        debug!(
            "Fitness table: n={}, {} entries, total={}, baseline={:.4}, floor={:.4}",
            encoder.n(),
            corpus.entries.len(),
            total,
            baseline,
            floor_log - norm
        );

        Ok(Self {
            encoder,
            table,
            baseline,
            floor: floor_log - norm,
            entries: corpus.entries.len(),
            total,
        })
    }

    /// Scores `text`, rejecting non-letters and texts shorter than `n`.
    pub fn score(&self, text: &[u8]) -> CfResult<f32> {
        ensure_letters(text)?;
        if text.len() < self.encoder.n() {
            return Err(CipherError::ShortText {
                len: text.len(),
                n: self.encoder.n(),
            });
        }
        Ok(self.score_letters(text))
    }

    /// Hot-path scoring. The caller guarantees `text` is uppercase letters
    /// and at least `n` long (decryption preserves both).
    #[inline(always)]
    pub fn score_letters(&self, text: &[u8]) -> f32 {
        let n = self.encoder.n();
        let mut idx = self.encoder.encode(text);
        let mut sum = self.table[idx];
        for &b in &text[n..] {
            idx = self.encoder.roll(idx, b);
            sum += self.table[idx];
        }
        let windows = (text.len() - n + 1) as f32;
        (sum / windows - self.baseline).abs()
    }

    /// Normalized log10 probability of a single n-gram.
    pub fn log_prob(&self, ngram: &str) -> CfResult<f32> {
        let upper = ngram.to_ascii_uppercase();
        let bytes = upper.as_bytes();
        ensure_letters(bytes)?;
        if bytes.len() != self.encoder.n() {
            return Err(CipherError::InvalidText(format!(
                "'{}' is not a {}-gram",
                ngram,
                self.encoder.n()
            )));
        }
        Ok(self.table[self.encoder.encode(bytes)])
    }

    pub fn n(&self) -> usize {
        self.encoder.n()
    }

    pub fn baseline(&self) -> f32 {
        self.baseline
    }

    /// Log-probability given to n-grams the corpus never saw.
    pub fn floor(&self) -> f32 {
        self.floor
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn total_count(&self) -> u64 {
        self.total
    }

    pub fn table_len(&self) -> usize {
        self.table.len()
    }
}
