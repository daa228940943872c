use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus Format Error (line {line}): {reason}")]
    CorpusFormat { line: usize, reason: String },

    #[error("Corpus contains no n-gram entries")]
    EmptyCorpus,

    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("Text too short to score: {len} letters, need at least {n}")]
    ShortText { len: usize, n: usize },

    #[error("Invalid Text: {0}")]
    InvalidText(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type CfResult<T> = Result<T, CipherError>;
