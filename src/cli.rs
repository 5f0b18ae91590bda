//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. These arguments are parsed at startup and then merged
//! with the configuration from the `notibus.toml` file and environment
//! variables.

use clap::Parser;
use figment::{
    providers::Serialized,
    value::{Dict, Map},
    Error, Figment, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Composes a notification and fans it out to the configured channels.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The message body to publish.
    #[arg(short, long, value_name = "TEXT")]
    pub message: Option<String>,

    /// Signature appended to the composed message.
    #[arg(long, value_name = "NAME")]
    pub signature: Option<String>,

    /// Skip the timestamp prefix.
    #[arg(long)]
    pub no_timestamp: bool,

    /// Logging level override (e.g. debug, info).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut figment = Figment::new();

        if let Some(level) = &self.log_level {
            figment = figment.merge(Serialized::default("log_level", level));
        }

        if let Some(signature) = &self.signature {
            figment = figment.merge(Serialized::default("compose.signature", signature));
        }

        // The flag is only ever a disable switch; its absence must not
        // override a `timestamp = true` from another source.
        if self.no_timestamp {
            figment = figment.merge(Serialized::default("compose.timestamp", false));
        }

        figment.data()
    }
}
