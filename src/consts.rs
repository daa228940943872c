/// Number of letters in the cipher alphabet (A..=Z).
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet in index order. Also the identity key's text form.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// N-gram length the fitness model is tuned for.
pub const QUADGRAM_LEN: usize = 4;

/// Largest supported n-gram length. 26^5 f32 entries is ~47 MB.
pub const MAX_NGRAM_LEN: usize = 5;

/// Default probability floor for n-grams absent from the corpus.
pub const DEFAULT_FLOOR_PERCENTAGE: f32 = 0.01;

/// Default number of leading corpus entries averaged into the baseline.
pub const DEFAULT_REFERENCE_TOP_K: usize = 1000;

/// Default number of consecutive non-improving trials before a climb ends.
pub const DEFAULT_STAGNATION_LIMIT: u32 = 1000;

/// Default number of trials between throughput reports.
pub const DEFAULT_REPORT_INTERVAL: u64 = 5_000_000;

/// Default corpus location, relative to the working directory.
pub const DEFAULT_CORPUS_PATH: &str = "data/english_quadgrams.txt";
