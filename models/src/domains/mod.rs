pub mod match_rules;
