use app::config::Config;
use league::run;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "league=info,app=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting");
    let config = Config::from_env()?;
    let summaries = run(&config)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
