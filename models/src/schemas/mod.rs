pub mod match_rule;
