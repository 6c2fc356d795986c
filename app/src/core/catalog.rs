use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use models::params::match_rule::NamedMatchRuleParams;
use models::schemas::match_rule::{InvalidRuleConfiguration, MatchRule};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use super::dtos::RuleSummary;
use super::results::{MatchOutcome, SetResult, validate_result};
use crate::error::AppError;

pub const DEFAULT_RULE_NAME: &str = "default";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read rule catalogue {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse rule catalogue: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rule entry {index} is invalid: {source}")]
    Invalid {
        index: usize,
        source: ValidationErrors,
    },
    #[error("rule {name:?}: {source}")]
    InvalidRule {
        name: String,
        source: InvalidRuleConfiguration,
    },
    #[error("rule {0:?} is defined more than once")]
    DuplicateRule(String),
}

/// Named match rules, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: BTreeMap<String, MatchRule>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default(rule: MatchRule) -> Self {
        let mut catalog = Self::new();
        catalog.rules.insert(DEFAULT_RULE_NAME.to_string(), rule);
        catalog
    }

    /// Parses a JSON array of `{ "name", "isBestOf", "numOfSets" }` entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<NamedMatchRuleParams> = serde_json::from_str(json)?;
        let mut catalog = Self::new();

        for (index, entry) in entries.into_iter().enumerate() {
            entry
                .validate()
                .map_err(|source| CatalogError::Invalid { index, source })?;

            let rule = MatchRule::try_from(entry.rule).map_err(|source| CatalogError::InvalidRule {
                name: entry.name.clone(),
                source,
            })?;
            catalog.insert(entry.name, rule)?;
        }

        tracing::debug!("Loaded {} match rules", catalog.len());
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Reading match rule catalogue");
        Self::from_json(&contents)
    }

    pub fn insert(&mut self, name: String, rule: MatchRule) -> Result<(), CatalogError> {
        if self.rules.contains_key(&name) {
            return Err(CatalogError::DuplicateRule(name));
        }
        self.rules.insert(name, rule);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&MatchRule> {
        self.rules.get(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchRule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// Validates `sets` against the rule registered as `name`.
    pub fn check_result(&self, name: &str, sets: &[SetResult]) -> Result<MatchOutcome, AppError> {
        let rule = self
            .get(name)
            .ok_or_else(|| AppError::UnknownRule(name.to_string()))?;
        Ok(validate_result(rule, sets)?)
    }

    pub fn summaries(&self) -> Vec<RuleSummary> {
        self.iter()
            .map(|(name, rule)| RuleSummary::new(name, rule))
            .collect()
    }
}
