use models::schemas::match_rule::{InvalidRuleConfiguration, MatchRule};
use std::{ops::Deref, path::PathBuf, sync::Arc};
use thiserror::Error;

use crate::core::{CatalogError, RuleCatalog};

const DEFAULT_BEST_OF: bool = true;
const DEFAULT_NUM_OF_SETS: u32 = 3;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error(transparent)]
    Rule(#[from] InvalidRuleConfiguration),
}

#[derive(Debug)]
pub struct ConfigInner {
    /// JSON rule catalogue; when unset only the default rule is available.
    pub rules_file: Option<PathBuf>,
    pub default_rule: MatchRule,
}

#[derive(Clone, Debug)]
pub struct Config(Arc<ConfigInner>);

impl Config {
    /// Reads the process environment, after loading `.env` if there is one.
    pub fn from_env() -> Result<Config, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let is_best_of = match lookup("DEFAULT_MATCH_BEST_OF") {
            Some(value) => parse_bool("DEFAULT_MATCH_BEST_OF", value)?,
            None => DEFAULT_BEST_OF,
        };
        let num_of_sets = match lookup("DEFAULT_MATCH_SETS") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "DEFAULT_MATCH_SETS",
                    value,
                })?,
            None => DEFAULT_NUM_OF_SETS,
        };

        let v = ConfigInner {
            rules_file: lookup("MATCH_RULES_FILE")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            default_rule: MatchRule::new(is_best_of, num_of_sets)?,
        };

        Ok(Self(Arc::new(v)))
    }

    /// The configured catalogue file, or a catalogue holding only the default rule.
    pub fn rule_catalog(&self) -> Result<RuleCatalog, CatalogError> {
        match &self.0.rules_file {
            Some(path) => RuleCatalog::load(path),
            None => {
                tracing::warn!("MATCH_RULES_FILE is not set, using the default match rule");
                Ok(RuleCatalog::with_default(self.0.default_rule))
            }
        }
    }
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
