use crate::error::{CfResult, CipherError};
use crate::ngram::NgramEncoder;
use crate::scorer::loader::NgramCount;
use crate::text::normalize;
use std::collections::HashMap;
use std::io::Write;

/// Counts every n-letter window of `content` after normalization (letters
/// only, uppercased, word boundaries removed).
///
/// Returned sorted by descending count, ties broken alphabetically, which is
/// the order `FitnessModel` expects.
pub fn count_ngrams(content: &str, n: usize) -> CfResult<Vec<NgramCount>> {
    let encoder = NgramEncoder::new(n)?;
    let letters = normalize(content);
    if letters.len() < n {
        return Err(CipherError::ShortText {
            len: letters.len(),
            n,
        });
    }

    let mut counts: HashMap<usize, u64> = HashMap::new();
    let mut idx = encoder.encode(&letters);
    *counts.entry(idx).or_default() += 1;
    for &b in &letters[n..] {
        idx = encoder.roll(idx, b);
        *counts.entry(idx).or_default() += 1;
    }

    let mut entries: Vec<NgramCount> = counts
        .into_iter()
        .map(|(idx, count)| NgramCount {
            ngram: encoder.decode(idx),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.ngram.cmp(&b.ngram)));

    Ok(entries)
}

/// Writes `<ngram> <count>` lines, keeping at most `limit` entries
/// (0 keeps all).
pub fn write_corpus<W: Write>(writer: W, entries: &[NgramCount], limit: usize) -> CfResult<usize> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .from_writer(writer);

    let take = if limit == 0 { entries.len() } else { limit };
    let mut written = 0;
    for entry in entries.iter().take(take) {
        let count = entry.count.to_string();
        wtr.write_record([entry.ngram.as_str(), count.as_str()])?;
        written += 1;
    }
    wtr.flush()?;

    Ok(written)
}
