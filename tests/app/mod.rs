use app::config::Config;
use std::collections::HashMap;

mod catalog;
mod results;

fn config_from(vars: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned()).expect("Config failed!")
}

#[test]
fn run_with_default_rule() {
    let config = config_from(&[("DEFAULT_MATCH_SETS", "2")]);
    let summaries = league::run(&config).expect("Run failed!");

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "default");
    assert_eq!(summaries[0].max_num_of_sets, 3);
    assert_eq!(summaries[0].sets_to_win, Some(2));
}

#[test]
fn run_with_rules_file() {
    let path = std::env::temp_dir().join(format!("league-rules-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"[
            { "name": "Indoor", "isBestOf": true, "numOfSets": 3 },
            { "name": "Cup", "isBestOf": false, "numOfSets": 2 }
        ]"#,
    )
    .expect("Write rules failed!");

    let config = config_from(&[("MATCH_RULES_FILE", path.to_str().unwrap())]);
    let summaries = league::run(&config);
    std::fs::remove_file(&path).ok();

    let summaries = summaries.expect("Run failed!");
    let maxima: Vec<_> = summaries
        .iter()
        .map(|s| (s.name.as_str(), s.max_num_of_sets))
        .collect();
    assert_eq!(maxima, [("Cup", 2), ("Indoor", 5)]);
}

#[test]
fn run_rejects_empty_catalogue() {
    let path = std::env::temp_dir().join(format!("league-empty-{}.json", std::process::id()));
    std::fs::write(&path, "[]").expect("Write rules failed!");

    let config = config_from(&[("MATCH_RULES_FILE", path.to_str().unwrap())]);
    let result = league::run(&config);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}
