//! Checks an entered match result against the rule it was played under.

use models::schemas::match_rule::MatchRule;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rules::{max_number_of_sets, sets_to_win};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

/// Points scored by each side in one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResult {
    pub home: u32,
    pub away: u32,
}

impl SetResult {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub home_sets: u32,
    pub away_sets: u32,
    /// `None` when a fixed-count match ends level.
    pub winner: Option<Side>,
}

/// Set numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResultError {
    #[error("no sets were entered")]
    NoSets,
    #[error("set {set} has no winner")]
    TiedSet { set: usize },
    #[error("{played} sets entered but at most {max} can be played")]
    TooManySets { played: usize, max: u32 },
    #[error("{played} sets entered but exactly {expected} must be played")]
    WrongNumberOfSets { played: usize, expected: u32 },
    #[error("set {set} was entered after the match was already decided")]
    SetsAfterDecision { set: usize },
    #[error("match is undecided at {home_sets}:{away_sets}")]
    Undecided { home_sets: u32, away_sets: u32 },
}

pub fn validate_result(rule: &MatchRule, sets: &[SetResult]) -> Result<MatchOutcome, ResultError> {
    let outcome = check_sets(rule, sets);
    if let Err(e) = &outcome {
        tracing::debug!(?rule, sets = sets.len(), "Rejected match result: {}", e);
    }
    outcome
}

fn check_sets(rule: &MatchRule, sets: &[SetResult]) -> Result<MatchOutcome, ResultError> {
    if sets.is_empty() {
        return Err(ResultError::NoSets);
    }

    let max = max_number_of_sets(rule);
    if sets.len() > max as usize {
        return Err(ResultError::TooManySets {
            played: sets.len(),
            max,
        });
    }

    let threshold = sets_to_win(rule);
    let (mut home_sets, mut away_sets) = (0u32, 0u32);

    for (index, set) in sets.iter().enumerate() {
        if let Some(target) = threshold
            && (home_sets == target || away_sets == target)
        {
            return Err(ResultError::SetsAfterDecision { set: index + 1 });
        }

        match set.winner() {
            Some(Side::Home) => home_sets += 1,
            Some(Side::Away) => away_sets += 1,
            None => return Err(ResultError::TiedSet { set: index + 1 }),
        }
    }

    let winner = match threshold {
        Some(target) => {
            if home_sets == target {
                Some(Side::Home)
            } else if away_sets == target {
                Some(Side::Away)
            } else {
                return Err(ResultError::Undecided {
                    home_sets,
                    away_sets,
                });
            }
        }
        None => {
            if sets.len() != rule.num_of_sets() as usize {
                return Err(ResultError::WrongNumberOfSets {
                    played: sets.len(),
                    expected: rule.num_of_sets(),
                });
            }
            match home_sets.cmp(&away_sets) {
                std::cmp::Ordering::Greater => Some(Side::Home),
                std::cmp::Ordering::Less => Some(Side::Away),
                std::cmp::Ordering::Equal => None,
            }
        }
    };

    Ok(MatchOutcome {
        home_sets,
        away_sets,
        winner,
    })
}
