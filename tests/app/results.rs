use app::core::{ResultError, RuleCatalog, RuleEvaluator, SetResult, Side};

const CATALOGUE: &str = r#"[
    { "name": "Indoor", "isBestOf": true, "numOfSets": 3 },
    { "name": "Tiebreak", "isBestOf": true, "numOfSets": 2 },
    { "name": "Friendly", "isBestOf": false, "numOfSets": 2 }
]"#;

#[test]
fn longest_legal_result_has_max_sets() {
    let catalog = RuleCatalog::from_json(CATALOGUE).expect("Parse catalogue failed!");

    for (name, rule) in catalog.iter() {
        if !rule.is_best_of() {
            continue;
        }
        // Alternate set winners, then let the home side take the decider.
        let max = rule.max_number_of_sets() as usize;
        let sets: Vec<_> = (0..max)
            .map(|i| {
                if i % 2 == 0 {
                    SetResult::new(25, 20)
                } else {
                    SetResult::new(20, 25)
                }
            })
            .collect();

        let outcome = catalog.check_result(name, &sets).expect("Validation failed!");
        assert_eq!(outcome.winner, Some(Side::Home));
        assert_eq!(Some(outcome.home_sets), rule.sets_to_win());
    }
}

#[test]
fn friendly_can_be_drawn() {
    let catalog = RuleCatalog::from_json(CATALOGUE).expect("Parse catalogue failed!");
    let sets = [SetResult::new(25, 20), SetResult::new(23, 25)];

    let outcome = catalog.check_result("Friendly", &sets).expect("Validation failed!");
    assert_eq!(outcome.winner, None);

    match catalog.check_result("Tiebreak", &sets) {
        Err(app::error::AppError::InvalidResult(ResultError::Undecided { .. })) => {}
        other => panic!("expected undecided result, got {other:?}"),
    }
}
