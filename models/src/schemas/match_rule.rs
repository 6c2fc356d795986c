use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::match_rules;
use crate::params::match_rule::MatchRuleParams;

/// Largest accepted set count. Rules are persisted in a signed 32-bit column.
pub const MAX_NUM_OF_SETS: u32 = i32::MAX as u32;

/// Raised when a rule is built from a set count outside `1..=MAX_NUM_OF_SETS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid match rule: number of sets must be between 1 and {max}, got {num_of_sets}", max = MAX_NUM_OF_SETS)]
pub struct InvalidRuleConfiguration {
    pub num_of_sets: i64,
}

/// Set-count format of a match.
///
/// With `is_best_of` set, `num_of_sets` is the number of sets a side has to
/// win and play stops as soon as one side gets there. Otherwise exactly
/// `num_of_sets` sets are played.
///
/// Always holds `1 <= num_of_sets <= MAX_NUM_OF_SETS`; decoding goes through
/// [`MatchRuleParams`] so serialized rules are checked the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "MatchRuleParams")]
pub struct MatchRule {
    is_best_of: bool,
    num_of_sets: u32,
}

impl MatchRule {
    pub fn new(is_best_of: bool, num_of_sets: u32) -> Result<Self, InvalidRuleConfiguration> {
        if num_of_sets == 0 || num_of_sets > MAX_NUM_OF_SETS {
            return Err(InvalidRuleConfiguration {
                num_of_sets: num_of_sets.into(),
            });
        }
        Ok(Self {
            is_best_of,
            num_of_sets,
        })
    }

    /// Best of `2n - 1`: first side to win `sets_to_win` sets takes the match.
    pub fn best_of(sets_to_win: u32) -> Result<Self, InvalidRuleConfiguration> {
        Self::new(true, sets_to_win)
    }

    /// Exactly `num_of_sets` sets, whatever the intermediate score.
    pub fn fixed(num_of_sets: u32) -> Result<Self, InvalidRuleConfiguration> {
        Self::new(false, num_of_sets)
    }

    pub fn is_best_of(&self) -> bool {
        self.is_best_of
    }

    pub fn num_of_sets(&self) -> u32 {
        self.num_of_sets
    }

    fn from_count(is_best_of: bool, num_of_sets: i64) -> Result<Self, InvalidRuleConfiguration> {
        let count =
            u32::try_from(num_of_sets).map_err(|_| InvalidRuleConfiguration { num_of_sets })?;
        Self::new(is_best_of, count)
    }
}

impl TryFrom<MatchRuleParams> for MatchRule {
    type Error = InvalidRuleConfiguration;

    fn try_from(params: MatchRuleParams) -> Result<Self, Self::Error> {
        Self::from_count(params.is_best_of, params.num_of_sets)
    }
}

impl TryFrom<match_rules::Model> for MatchRule {
    type Error = InvalidRuleConfiguration;

    fn try_from(row: match_rules::Model) -> Result<Self, Self::Error> {
        Self::from_count(row.is_best_of, row.num_of_sets.into())
    }
}
