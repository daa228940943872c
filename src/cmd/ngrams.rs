use cipherforge::consts::QUADGRAM_LEN;
use cipherforge::corpus::{count_ngrams, write_corpus};
use cipherforge::error::CfResult;
use clap::Args;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct NgramsArgs {
    /// Raw training text.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination corpus file (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short = 'n', long = "length", default_value_t = QUADGRAM_LEN)]
    pub n: usize,

    /// Keep only the most frequent entries (0 keeps all).
    #[arg(long, default_value_t = 0)]
    pub top: usize,
}

pub fn run(args: &NgramsArgs) -> CfResult<()> {
    info!("📂 Counting {}-grams in: {}", args.n, args.input.display());
    let content = fs::read_to_string(&args.input)?;
    let entries = count_ngrams(&content, args.n)?;

    let written = match &args.output {
        Some(path) => {
            let written = write_corpus(File::create(path)?, &entries, args.top)?;
            info!("💾 Wrote {} entries to {}", written, path.display());
            written
        }
        None => write_corpus(io::stdout().lock(), &entries, args.top)?,
    };

    info!("✅ {} distinct {}-grams, {} written", entries.len(), args.n, written);
    Ok(())
}
