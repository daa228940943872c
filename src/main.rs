use cipherforge::config::Config;
use cipherforge::consts::DEFAULT_CORPUS_PATH;
use cipherforge::error::{CfResult, CipherError};
use cipherforge::scorer::FitnessModel;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Breaks substitution ciphers by quadgram hill climbing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// N-gram corpus: one `<ngram> <count>` per line, most frequent first.
    #[arg(global = true, short, long, default_value = DEFAULT_CORPUS_PATH)]
    corpus: PathBuf,

    /// JSON file with search/fitness parameters. Flags given on the command
    /// line take precedence.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the key of a ciphertext.
    Crack(cmd::crack::CrackArgs),
    /// Score texts against the corpus.
    Score(cmd::score::ScoreArgs),
    /// Encrypt (or decrypt) text with a given or random key.
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Build a corpus file from raw text.
    Ngrams(cmd::ngrams::NgramsArgs),
}

fn main() {
    // 1. Parse raw matches so explicit flags can be told apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli, &matches) {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli, matches: &ArgMatches) -> CfResult<()> {
    match &cli.command {
        Commands::Crack(args) => {
            let sub = subcommand_matches(matches, "crack")?;
            let config = resolve_config(&args.config, cli.config.as_deref(), sub)?;
            let model = load_model(&cli.corpus, &config)?;
            cmd::crack::run(args, config, model)
        }
        Commands::Score(args) => {
            let sub = subcommand_matches(matches, "score")?;
            let config = resolve_config(&args.config, cli.config.as_deref(), sub)?;
            let model = load_model(&cli.corpus, &config)?;
            cmd::score::run(args, model)
        }
        Commands::Encrypt(args) => cmd::encrypt::run(args),
        Commands::Ngrams(args) => cmd::ngrams::run(args),
    }
}

fn subcommand_matches<'a>(matches: &'a ArgMatches, name: &str) -> CfResult<&'a ArgMatches> {
    matches
        .subcommand_matches(name)
        .ok_or_else(|| CipherError::Config(format!("missing arguments for '{}'", name)))
}

/// File config as the base, explicit CLI flags on top.
fn resolve_config(cli_config: &Config, path: Option<&Path>, sub: &ArgMatches) -> CfResult<Config> {
    let config = match path {
        Some(path) => {
            info!("⚙️  Loading config from: {}", path.display());
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, sub);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn load_model(path: &Path, config: &Config) -> CfResult<Arc<FitnessModel>> {
    if !path.exists() {
        return Err(CipherError::Config(format!(
            "corpus not found at '{}' (build one with `cipherforge ngrams --input <text>`)",
            path.display()
        )));
    }
    let model = FitnessModel::from_path(path, &config.fitness)?;
    info!(
        "📊 Fitness model ready: {} {}-grams, baseline {:.4}",
        model.entries(),
        model.n(),
        model.baseline()
    );
    Ok(Arc::new(model))
}
