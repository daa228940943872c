use crate::reports;
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::scorer::FitnessModel;
use cipherforge::text::normalize;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// Texts to score. Non-letters are ignored.
    pub texts: Vec<String>,

    /// Score each non-empty line of this file separately.
    #[arg(short, long, conflicts_with = "texts")]
    pub file: Option<PathBuf>,
}

pub struct ScoreRow {
    pub text: String,
    pub letters: usize,
    pub score: Option<f32>,
}

pub fn run(args: &ScoreArgs, model: Arc<FitnessModel>) -> CfResult<()> {
    let inputs: Vec<String> = if !args.texts.is_empty() {
        args.texts.clone()
    } else {
        super::read_input(None, args.file.as_deref())?
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string)
            .collect()
    };

    let mut rows = Vec::with_capacity(inputs.len());
    for input in inputs {
        let letters = normalize(&input);
        let score = match model.score(&letters) {
            Ok(s) => Some(s),
            Err(e) => {
                warn!("⚠️  Skipping '{}': {}", input, e);
                None
            }
        };
        rows.push(ScoreRow {
            text: input,
            letters: letters.len(),
            score,
        });
    }

    reports::print_score_table(&rows);
    Ok(())
}
