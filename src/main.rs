//! notibus - notification composition and fan-out
//!
//! Composes a notification from the command line, publishes it through the
//! hub, and fans it out to every delivery channel enabled in the
//! configuration.

use anyhow::Result;
use clap::Parser;
use notibus::{app::App, cli::Cli, config::Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment,
    // and CLI args.
    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(err) => {
            // Initialize logging manually for this specific error.
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("info"))
                .init();
            error!("Failed to load configuration: {err:#}");
            // Exit if configuration fails, as it's a critical step.
            std::process::exit(1);
        }
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("notibus starting up...");

    // Log the loaded configuration settings for visibility
    info!("-------------------- Configuration --------------------");
    info!("Log Level: {}", config.log_level);
    info!("Timestamp Layer: {}", config.compose.timestamp);
    info!(
        "Signature: {}",
        config.compose.signature.as_deref().unwrap_or("None")
    );
    info!(
        "Email Channel: {}",
        match &config.delivery.email {
            Some(email) if email.enabled => email.address.as_str(),
            _ => "Disabled",
        }
    );
    info!(
        "SMS Channel: {}",
        match &config.delivery.sms {
            Some(sms) if sms.enabled => sms.number.as_str(),
            _ => "Disabled",
        }
    );
    info!(
        "Popup Channel: {}",
        if config.delivery.popup.enabled {
            "Enabled"
        } else {
            "Disabled"
        }
    );
    info!("-------------------------------------------------------");

    let app = App::builder(config).build();

    let message = cli
        .message
        .as_deref()
        .unwrap_or("Your notification service is up and running.");

    app.publish_message(message).await?;

    info!(
        published = app.service().published_count(),
        "notification published to all subscribers"
    );

    Ok(())
}
