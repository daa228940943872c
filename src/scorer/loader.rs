use crate::consts::MAX_NGRAM_LEN;
use crate::error::{CfResult, CipherError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramCount {
    pub ngram: String,
    pub count: u64,
}

/// Parsed corpus, in file order. Files are expected to be sorted by
/// descending count; the order is preserved but not checked.
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    pub n: usize,
    pub entries: Vec<NgramCount>,
}

impl RawCorpus {
    pub fn total_count(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.count))
    }
}

fn format_error(line: usize, reason: impl Into<String>) -> CipherError {
    CipherError::CorpusFormat {
        line,
        reason: reason.into(),
    }
}

/// Reads `<ngram> <count>` lines. Fields may be separated by any run of
/// whitespace; blank lines and `#` comments are skipped. The whole input is
/// validated before anything is returned.
pub fn read_corpus<R: Read>(reader: R) -> CfResult<RawCorpus> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut corpus = RawCorpus::default();

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line() as usize).unwrap_or(0);

        let fields: Vec<&str> = rec.iter().flat_map(str::split_whitespace).collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() != 2 {
            return Err(format_error(
                line,
                format!("expected '<ngram> <count>', got {} fields", fields.len()),
            ));
        }

        let token = fields[0];
        if !token.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(format_error(
                line,
                format!("'{}' is not an alphabetic n-gram", token),
            ));
        }
        if token.len() > MAX_NGRAM_LEN {
            return Err(format_error(
                line,
                format!(
                    "'{}' is longer than the supported maximum of {}",
                    token, MAX_NGRAM_LEN
                ),
            ));
        }
        if corpus.n == 0 {
            corpus.n = token.len();
        } else if token.len() != corpus.n {
            return Err(format_error(
                line,
                format!(
                    "'{}' has length {}, earlier entries have length {}",
                    token,
                    token.len(),
                    corpus.n
                ),
            ));
        }

        let count: u64 = fields[1]
            .parse()
            .map_err(|_| format_error(line, format!("'{}' is not an integer count", fields[1])))?;
        if count == 0 {
            return Err(format_error(line, format!("count for '{}' is zero", token)));
        }

        corpus.entries.push(NgramCount {
            ngram: token.to_ascii_uppercase(),
            count,
        });
    }

    debug!(
        "Parsed corpus: {} entries of length {}",
        corpus.entries.len(),
        corpus.n
    );

    Ok(corpus)
}

pub fn load_corpus<P: AsRef<Path>>(path: P) -> CfResult<RawCorpus> {
    let file = File::open(path)?;
    read_corpus(file)
}
