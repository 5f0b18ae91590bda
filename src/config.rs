//! Configuration management for the notification bus
//!
//! This module defines the main `Config` struct and its sub-structs,
//! responsible for holding all application settings. It uses the `figment`
//! crate to load configuration from a `notibus.toml` file and merge it with
//! environment variables and command-line arguments.

use crate::cli::Cli;
use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// The logging level for the application.
    pub log_level: String,
    /// How published notifications are composed.
    #[serde(default)]
    pub compose: ComposeConfig,
    /// Which delivery channels are wired up.
    #[serde(default)]
    pub delivery: DeliveryConfig,
}

/// Settings for the decoration layers applied to outgoing messages.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ComposeConfig {
    /// Prefix messages with the publication timestamp.
    pub timestamp: bool,
    /// Signature appended to every message, if any.
    pub signature: Option<String>,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            timestamp: true,
            signature: None,
        }
    }
}

/// Per-channel delivery settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DeliveryConfig {
    pub email: Option<EmailConfig>,
    pub sms: Option<SmsConfig>,
    #[serde(default)]
    pub popup: PopupConfig,
}

/// Configuration for the email channel.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailConfig {
    pub enabled: bool,
    /// The destination address.
    pub address: String,
}

/// Configuration for the SMS channel.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmsConfig {
    pub enabled: bool,
    /// The destination phone number.
    pub number: String,
}

/// Configuration for the local popup channel.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PopupConfig {
    pub enabled: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Loads the application configuration by layering sources: defaults,
    /// the TOML file, environment variables, and CLI arguments.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .as_deref()
            .unwrap_or_else(|| Path::new("notibus.toml"));

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            // Allow overriding with environment variables, e.g., NOTIBUS_LOG_LEVEL=debug
            .merge(Env::prefixed("NOTIBUS_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }
}

// Provide a default implementation for tests and easy setup.
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            compose: ComposeConfig::default(),
            delivery: DeliveryConfig::default(),
        }
    }
}
