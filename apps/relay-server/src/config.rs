//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anpr_core::domain::{TimestampFormat, ViewerLink};
use anpr_core::{RelaySettings, SettingsError};

/// Default request body limit. Alerts embed a base64 vehicle crop.
const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub webhook: Option<WebhookSettings>,
    pub relay: RelayConfig,
}

/// Where cards are posted.
#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub url: String,
    pub timeout: Option<Duration>,
}

/// Card rendering options.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub viewer_base_url: String,
    /// Raw value; parsed in [`RelayConfig::settings`] so bad input aborts startup.
    pub utc_offset_hours: String,
    pub locale: String,
    pub time_format: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let webhook = lookup("WEBHOOK_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| WebhookSettings {
                url,
                timeout: lookup("WEBHOOK_TIMEOUT_SECS")
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs),
            });

        let relay = RelayConfig {
            viewer_base_url: lookup("VIEWER_BASE_URL")
                .unwrap_or_else(|| ViewerLink::DEFAULT_BASE_URL.to_string()),
            utc_offset_hours: lookup("ALERT_UTC_OFFSET_HOURS").unwrap_or_else(|| "0".to_string()),
            locale: lookup("ALERT_LOCALE")
                .unwrap_or_else(|| TimestampFormat::DEFAULT_LOCALE.to_string()),
            time_format: lookup("ALERT_TIME_FORMAT")
                .unwrap_or_else(|| TimestampFormat::DEFAULT_PATTERN.to_string()),
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            max_body_bytes: lookup("MAX_BODY_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            webhook,
            relay,
        }
    }
}

impl RelayConfig {
    /// Validate and build the relay's rendering settings.
    pub fn settings(&self) -> Result<RelaySettings, SettingsError> {
        let utc_offset_hours = self
            .utc_offset_hours
            .trim()
            .parse()
            .map_err(|_| SettingsError::InvalidOffset(self.utc_offset_hours.clone()))?;

        Ok(RelaySettings {
            timestamp: TimestampFormat::new(
                utc_offset_hours,
                &self.locale,
                self.time_format.as_str(),
            )?,
            viewer: ViewerLink::new(self.viewer_base_url.as_str()),
        })
    }
}
