//! Shop configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults
//! 2. `laundry.yaml` in the current directory (if it exists)
//! 3. File given by the `path` argument
//! 4. File named by the `LAUNDRY_CONFIG` environment variable
//! 5. `LAUNDRY__SECTION__KEY` environment variables, e.g.
//!    `LAUNDRY__ORDERS__ALLOW_UNPRICED_GARMENTS=true`

use crate::notify::Channel;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "laundry.yaml";
pub const CONFIG_ENV_VAR: &str = "LAUNDRY_CONFIG";
pub const CONFIG_ENV_PREFIX: &str = "LAUNDRY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub shop: ShopSettings,
    pub orders: OrderSettings,
    pub notifications: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    pub company_name: String,
    /// Request queue length of every resource actor.
    pub actor_buffer: usize,
    /// Insert the default price list and supplies at startup.
    pub seed_defaults: bool,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            company_name: "Lavandería Effiwash".to_string(),
            actor_buffer: 32,
            seed_defaults: true,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    /// Accept garments missing from the price list at a unit price of zero.
    pub allow_unpriced_garments: bool,
}

/// Twilio credentials. Any missing credential disables sending.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub account_sid: Option<String>,
    pub auth_token: Option<String>,
    pub from_number: Option<String>,
    pub whatsapp_from: Option<String>,
    pub api_base: String,
    pub channel: Channel,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            account_sid: None,
            auth_token: None,
            from_number: None,
            whatsapp_from: None,
            api_base: "https://api.twilio.com".to_string(),
            channel: Channel::Sms,
        }
    }
}

impl ShopConfig {
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        use ::config::{Config, Environment, File, FileFormat};

        let mut builder =
            Config::builder().add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(config_path) = path {
            builder = builder.add_source(File::new(config_path, FileFormat::Yaml).required(true));
        }

        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&config_path, FileFormat::Yaml).required(true));
        }

        let config: ShopConfig = builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults without seeding, for tests that want an empty shop.
    pub fn for_test() -> Self {
        let mut config = Self::default();
        config.shop.seed_defaults = false;
        config
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.shop.actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "shop.actor_buffer",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.notifications.api_base.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "notifications.api_base",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.shop.actor_buffer, 32);
        assert!(config.shop.seed_defaults);
        assert!(!config.orders.allow_unpriced_garments);
        assert_eq!(config.notifications.channel, Channel::Sms);
        assert!(config.notifications.account_sid.is_none());
    }

    #[test]
    fn file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "shop:\n  company_name: Lavandería Centro\n  actor_buffer: 8\norders:\n  allow_unpriced_garments: true\nnotifications:\n  channel: whatsapp\n  account_sid: AC42"
        )
        .unwrap();

        let config = ShopConfig::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.shop.company_name, "Lavandería Centro");
        assert_eq!(config.shop.actor_buffer, 8);
        assert!(config.shop.seed_defaults);
        assert!(config.orders.allow_unpriced_garments);
        assert_eq!(config.notifications.channel, Channel::Whatsapp);
        assert_eq!(config.notifications.account_sid.as_deref(), Some("AC42"));
        assert_eq!(config.notifications.api_base, "https://api.twilio.com");
    }

    #[test]
    fn zero_buffer_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "shop:\n  actor_buffer: 0").unwrap();

        let err = ShopConfig::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "shop.actor_buffer",
                ..
            }
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = ShopConfig::load(Some("/nonexistent/laundry-desk.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
