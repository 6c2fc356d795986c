use models::schemas::match_rule::InvalidRuleConfiguration;
use thiserror::Error;

use crate::config::ConfigError;
use crate::core::{CatalogError, ResultError};
use crate::utils::email::UnknownTemplate;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidRule(#[from] InvalidRuleConfiguration),
    #[error(transparent)]
    InvalidResult(#[from] ResultError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Template(#[from] UnknownTemplate),
    #[error("no match rule named {0:?}")]
    UnknownRule(String),
}
