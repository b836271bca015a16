use color_eyre::eyre::Result;
use herald::{HashMapUserStore, HeraldService, adapters::config::HeraldSetting, build_email_sender};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Composition root: every adapter is built here and handed to the service
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = HeraldSetting::load()?;

    // Create stores
    let user_store = HashMapUserStore::new();

    // Create email sender
    let email_sender = build_email_sender(&config)?;

    let herald_service = HeraldService::new(user_store, email_sender);

    let listener = tokio::net::TcpListener::bind(&config.app.address).await?;
    tracing::info!("Starting herald service...");

    herald_service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
