//! Run configuration.
//!
//! Read from `WC_*` environment variables by the binary. Library callers
//! usually build a [`SimConfig`] directly.

use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::TournamentError;
use crate::tournament::outcome::MatchConfig;

/// Default base seed.
pub const DEFAULT_SEED: u64 = 2026;

/// Default number of trials.
pub const DEFAULT_TRIALS: u64 = 1000;

/// Settings for a batch of trials.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Base seed; trial seeds are derived from it.
    pub seed: u64,
    /// Number of trials to run.
    pub trials: u64,
    /// Print the report for the demo trial.
    pub verbose: bool,
    /// Print the tally as JSON.
    pub json: bool,
    /// Match model settings.
    pub match_config: MatchConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            trials: DEFAULT_TRIALS,
            verbose: false,
            json: false,
            match_config: MatchConfig::default(),
        }
    }
}

impl SimConfig {
    /// Create config from environment variables.
    ///
    /// `WC_SEED`, `WC_TRIALS`, `WC_VERBOSE`, `WC_JSON`, `WC_MAX_DRAW_PROB`.
    /// Unset variables keep their defaults; unparseable ones are an error.
    pub fn from_env() -> Result<Self, TournamentError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, TournamentError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str| lookup(key).map(|v| v == "true" || v == "1").unwrap_or(false);

        let config = Self {
            seed: parse_var(&lookup, "WC_SEED")?.unwrap_or(defaults.seed),
            trials: parse_var(&lookup, "WC_TRIALS")?.unwrap_or(defaults.trials),
            verbose: flag("WC_VERBOSE"),
            json: flag("WC_JSON"),
            match_config: MatchConfig {
                max_draw_prob: parse_var(&lookup, "WC_MAX_DRAW_PROB")?
                    .unwrap_or(defaults.match_config.max_draw_prob),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject values outside their domain.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.trials == 0 {
            return Err(TournamentError::InvalidConfig("WC_TRIALS must be at least 1".into()));
        }

        let p = self.match_config.max_draw_prob;
        if !(0.0..=1.0).contains(&p) {
            return Err(TournamentError::InvalidConfig(format!(
                "WC_MAX_DRAW_PROB must be in [0, 1], got {p}"
            )));
        }

        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, TournamentError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| TournamentError::InvalidConfig(format!("{key}={raw:?} is not valid")))
        })
        .transpose()
}
