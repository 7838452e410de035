//! Formatting defaults.
//!
//! Loaded from a JSON file when one is given, otherwise from environment
//! variables:
//! - `UTILKIT_LOCALE` - locale tag such as `fr-FR` or `en-US`
//! - `UTILKIT_CURRENCY` - ISO currency code such as `EUR`
//! - `UTILKIT_COUNTRY_CODE` - calling code used for national phone numbers
//! - `UTILKIT_UTC_OFFSET` - `local`, `utc` or an offset such as `+02:00`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::datetime::{DateTimeOptions, Zone};
use crate::error::{Result, UtilError};
use crate::intl::{Currency, DateFormat, Locale, MoneyFormat};
use crate::phone::DEFAULT_COUNTRY_CODE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub locale: Locale,
    pub currency: Currency,
    pub default_country_code: u16,
    /// Time zone for rendered dates. `None` means the system zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency: Currency::default(),
            default_country_code: DEFAULT_COUNTRY_CODE,
            utc_offset: None,
        }
    }
}

impl Config {
    /// Defaults overridden by `UTILKIT_*` environment variables.
    ///
    /// Invalid values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("UTILKIT_LOCALE") {
            match raw.parse() {
                Ok(locale) => config.locale = locale,
                Err(e) => tracing::warn!("Ignoring UTILKIT_LOCALE: {}", e),
            }
        }
        if let Some(raw) = lookup("UTILKIT_CURRENCY") {
            match raw.parse() {
                Ok(currency) => config.currency = currency,
                Err(e) => tracing::warn!("Ignoring UTILKIT_CURRENCY: {}", e),
            }
        }
        if let Some(raw) = lookup("UTILKIT_COUNTRY_CODE") {
            match raw.trim().trim_start_matches('+').parse() {
                Ok(code) => config.default_country_code = code,
                Err(e) => tracing::warn!("Ignoring UTILKIT_COUNTRY_CODE {:?}: {}", raw, e),
            }
        }
        if let Some(raw) = lookup("UTILKIT_UTC_OFFSET") {
            match raw.parse::<Zone>() {
                Ok(_) => config.utc_offset = Some(raw),
                Err(e) => tracing::warn!("Ignoring UTILKIT_UTC_OFFSET: {}", e),
            }
        }

        config
    }

    /// Load from a JSON file, falling back to [`Config::from_env`] when the
    /// file is missing or unreadable.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            tracing::info!(
                "No config file found at {}, using environment defaults",
                path.display()
            );
            return Self::from_env();
        }

        match Self::load_from_path(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load config from {}: {}, using defaults",
                    path.display(),
                    e
                );
                Self::from_env()
            }
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| UtilError::Config(format!("{}: {}", path.display(), e)))?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|e| UtilError::Config(e.to_string()))?;
        // Reject bad offsets here so later formatting can't fail on them
        config.zone()?;
        Ok(config)
    }

    pub fn zone(&self) -> Result<Zone> {
        match &self.utc_offset {
            Some(offset) => offset.parse(),
            None => Ok(Zone::Local),
        }
    }

    pub fn date_format(&self) -> Result<DateFormat> {
        Ok(DateFormat {
            locale: self.locale,
            zone: self.zone()?,
            ..DateFormat::default()
        })
    }

    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            locale: self.locale,
            currency: self.currency,
        }
    }

    pub fn date_time_options(&self) -> Result<DateTimeOptions> {
        Ok(DateTimeOptions {
            zone: self.zone()?,
            ..DateTimeOptions::default()
        })
    }
}
