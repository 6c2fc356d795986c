//! Derived quantities of a match rule: how many sets can be played and how
//! many a side needs to win.

use models::schemas::match_rule::MatchRule;

/// Most sets a match can run to under `rule`.
///
/// Fixed-count rules always play every set. A best-of rule with a threshold
/// of `n` can go to `2n - 1` sets before one side has `n` wins.
pub fn max_number_of_sets(rule: &MatchRule) -> u32 {
    let n = rule.num_of_sets();
    if rule.is_best_of() { 2 * n - 1 } else { n }
}

/// Fewest sets a complete match can have. A best-of match ends earliest on a sweep.
pub fn min_number_of_sets(rule: &MatchRule) -> u32 {
    rule.num_of_sets()
}

/// Sets a side must win to end the match, `None` for fixed-count rules.
pub fn sets_to_win(rule: &MatchRule) -> Option<u32> {
    rule.is_best_of().then(|| rule.num_of_sets())
}

/// Method-style access to the evaluator functions.
pub trait RuleEvaluator {
    fn max_number_of_sets(&self) -> u32;
    fn min_number_of_sets(&self) -> u32;
    fn sets_to_win(&self) -> Option<u32>;
}

impl RuleEvaluator for MatchRule {
    fn max_number_of_sets(&self) -> u32 {
        max_number_of_sets(self)
    }

    fn min_number_of_sets(&self) -> u32 {
        min_number_of_sets(self)
    }

    fn sets_to_win(&self) -> Option<u32> {
        sets_to_win(self)
    }
}
