use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRuleParams {
    pub is_best_of: bool,
    #[validate(range(min = 1, max = 2147483647))]
    pub num_of_sets: i64,
}

/// A match rule as it appears in a rule catalogue file.
#[derive(Deserialize, Validate, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NamedMatchRuleParams {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub rule: MatchRuleParams,
}
