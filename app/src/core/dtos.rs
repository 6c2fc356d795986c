use models::schemas::match_rule::MatchRule;
use serde::Serialize;

use super::rules::{max_number_of_sets, sets_to_win};

/// A named rule together with the quantities derived from it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuleSummary {
    pub name: String,
    pub is_best_of: bool,
    pub num_of_sets: u32,
    pub max_num_of_sets: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets_to_win: Option<u32>,
}

impl RuleSummary {
    pub fn new(name: &str, rule: &MatchRule) -> Self {
        Self {
            name: name.to_string(),
            is_best_of: rule.is_best_of(),
            num_of_sets: rule.num_of_sets(),
            max_num_of_sets: max_number_of_sets(rule),
            sets_to_win: sets_to_win(rule),
        }
    }
}
