use crate::consts::{
    DEFAULT_FLOOR_PERCENTAGE, DEFAULT_REFERENCE_TOP_K, DEFAULT_REPORT_INTERVAL,
    DEFAULT_STAGNATION_LIMIT,
};
use crate::error::{CfResult, CipherError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub fitness: FitnessParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Consecutive non-improving swaps before a climb is declared converged.
    #[arg(long, default_value_t = DEFAULT_STAGNATION_LIMIT)]
    pub stagnation_limit: u32,

    /// Stop after this many restarts.
    #[arg(short = 'r', long)]
    pub max_restarts: Option<u64>,

    /// Stop after this many seconds.
    #[arg(short = 'T', long = "time")]
    pub max_time_secs: Option<u64>,

    /// Stop once the best score drops to this value or below.
    #[arg(long)]
    pub target_score: Option<f32>,

    /// Stop once the best plaintext contains this fragment.
    #[arg(long)]
    pub crib: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Trials between throughput reports (0 disables them).
    #[arg(long, default_value_t = DEFAULT_REPORT_INTERVAL)]
    pub report_interval: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            stagnation_limit: DEFAULT_STAGNATION_LIMIT,
            max_restarts: None,
            max_time_secs: None,
            target_score: None,
            crib: None,
            seed: None,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessParams {
    /// Probability assigned to n-grams missing from the corpus.
    #[arg(long, default_value_t = DEFAULT_FLOOR_PERCENTAGE)]
    pub floor_percentage: f32,

    /// Leading corpus entries averaged into the reference baseline.
    #[arg(long, default_value_t = DEFAULT_REFERENCE_TOP_K)]
    pub reference_top_k: usize,
}

impl Default for FitnessParams {
    fn default() -> Self {
        Self {
            floor_percentage: DEFAULT_FLOOR_PERCENTAGE,
            reference_top_k: DEFAULT_REFERENCE_TOP_K,
        }
    }
}

impl FitnessParams {
    pub fn validate(&self) -> CfResult<()> {
        if !(self.floor_percentage.is_finite() && self.floor_percentage > 0.0) {
            return Err(CipherError::Config(format!(
                "floor_percentage must be a positive number, got {}",
                self.floor_percentage
            )));
        }
        if self.reference_top_k == 0 {
            return Err(CipherError::Config(
                "reference_top_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SearchParams {
    pub fn validate(&self) -> CfResult<()> {
        if self.stagnation_limit == 0 {
            return Err(CipherError::Config(
                "stagnation_limit must be at least 1".to_string(),
            ));
        }
        if let Some(crib) = &self.crib {
            if crate::text::normalize(crib).is_empty() {
                return Err(CipherError::Config(format!(
                    "crib '{}' contains no letters",
                    crib
                )));
            }
        }
        Ok(())
    }

    /// True when at least one stop condition is configured.
    pub fn is_bounded(&self) -> bool {
        self.max_restarts.is_some()
            || self.max_time_secs.is_some()
            || self.target_score.is_some()
            || self.crib.is_some()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> CfResult<()> {
        self.search.validate()?;
        self.fitness.validate()
    }

    /// Overwrites fields with values the user typed on the command line.
    /// Defaults filled in by clap do not override the file.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.stagnation_limit);
        update_if_present!(search.max_restarts);
        update_if_present!(search.max_time_secs);
        update_if_present!(search.target_score);
        update_if_present!(search.crib);
        update_if_present!(search.seed);
        update_if_present!(search.report_interval);

        update_if_present!(fitness.floor_percentage);
        update_if_present!(fitness.reference_top_k);
    }
}
