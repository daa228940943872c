use crate::reports;
use cipherforge::config::Config;
use cipherforge::error::{CfResult, CipherError};
use cipherforge::optimizer::{NewBest, Optimizer, SearchObserver, SearchOptions, Throughput};
use cipherforge::samples::KnownCipher;
use cipherforge::scorer::FitnessModel;
use cipherforge::text::normalize;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    #[command(flatten)]
    pub config: Config,

    /// Ciphertext. Non-letters are ignored.
    pub text: Option<String>,

    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Bundled ciphertext (benchmark, caesar, keyword).
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub sample: Option<KnownCipher>,

    /// Print the outcome as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

struct CliLogger;

impl SearchObserver for CliLogger {
    fn on_restart(&self, restart: u64, score: f32) {
        debug!("Restart #{} from {:.4}", restart, score);
    }

    fn on_new_best(&self, event: &NewBest) {
        info!(
            "🏆 New best score {:.4} (restart #{})",
            event.score, event.restart
        );
        info!("   Plaintext: {}", event.plaintext);
        info!("   Going from {} to {}", event.previous_key, event.key);
    }

    fn on_throughput(&self, report: &Throughput) {
        info!(
            "[{:.0} attempts/s] {} trials in {:.1}s",
            report.attempts_per_sec,
            report.trials,
            report.elapsed.as_secs_f64()
        );
    }
}

/// Bundled samples carry a known plaintext fragment; use it unless a crib was given.
fn apply_sample_crib(config: &mut Config, sample: Option<KnownCipher>) {
    if config.search.crib.is_some() {
        return;
    }
    if let Some(crib) = sample.and_then(|s| s.crib()) {
        info!("🎯 Using sample crib: {}", crib);
        config.search.crib = Some(crib.to_string());
    }
}

pub fn run(args: &CrackArgs, mut config: Config, model: Arc<FitnessModel>) -> CfResult<()> {
    let raw = match args.sample {
        Some(sample) => {
            info!("📜 Using sample ciphertext: {}", sample);
            sample.ciphertext().to_string()
        }
        None => super::read_input(args.text.as_deref(), args.file.as_deref())?,
    };

    let ciphertext = normalize(&raw);
    if ciphertext.is_empty() {
        return Err(CipherError::InvalidText(
            "ciphertext contains no letters".to_string(),
        ));
    }
    info!("🔐 Ciphertext: {} letters", ciphertext.len());
    apply_sample_crib(&mut config, args.sample);

    let options = SearchOptions::from(&config.search);
    let optimizer = Optimizer::new(model, options);
    let outcome = optimizer.run(&ciphertext, &CliLogger)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        reports::print_outcome(&outcome);
    }

    Ok(())
}
