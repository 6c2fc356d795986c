use anyhow::bail;
use app::config::Config;
use app::core::RuleSummary;

/// Loads the configured rule catalogue and derives the format of every rule.
pub fn run(config: &Config) -> anyhow::Result<Vec<RuleSummary>> {
    let catalog = config.rule_catalog()?;
    if catalog.is_empty() {
        bail!("the match rule catalogue is empty");
    }

    let summaries = catalog.summaries();
    for summary in &summaries {
        tracing::info!(
            name = %summary.name,
            best_of = summary.is_best_of,
            max_sets = summary.max_num_of_sets,
            "Match rule ready"
        );
    }

    Ok(summaries)
}
