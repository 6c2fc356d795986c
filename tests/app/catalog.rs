use app::core::{RuleCatalog, RuleEvaluator};
use models::domains::match_rules;
use models::schemas::match_rule::MatchRule;

#[test]
fn persisted_rows_and_catalogue_agree() {
    let catalog = RuleCatalog::from_json(
        r#"[{ "name": "Volleyball", "isBestOf": true, "numOfSets": 3 }]"#,
    )
    .expect("Parse catalogue failed!");

    let row = match_rules::Model {
        id: 1,
        name: "Volleyball".to_owned(),
        is_best_of: true,
        num_of_sets: 3,
    };
    let from_row = MatchRule::try_from(row).expect("Map row failed!");

    assert_eq!(catalog.get("Volleyball"), Some(&from_row));
    assert_eq!(from_row.max_number_of_sets(), 5);
}

#[test]
fn decoded_rule_keeps_invariant() {
    assert!(serde_json::from_str::<MatchRule>(r#"{"isBestOf":true,"numOfSets":-3}"#).is_err());

    let rule: MatchRule = serde_json::from_str(r#"{"isBestOf":true,"numOfSets":1}"#).unwrap();
    assert_eq!(rule.max_number_of_sets(), 1);
    assert_eq!(rule.sets_to_win(), Some(1));
}
