use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracklift_enricher::{pipeline, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tracklift_enricher=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    tracing::info!("Starting Tracklift enricher");

    let config = Config::from_env()?;
    pipeline::run(&config).await?;

    Ok(())
}
