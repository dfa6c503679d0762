//! # Configuration
//!
//! Startup configuration for the dashboard core.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                            │
//! │     TIENDA_FEATURES=inventory,orders,purchases                          │
//! │     TIENDA_CURRENCY_SYMBOL=$                                            │
//! │     TIENDA_CURRENCY_DECIMALS=2                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                    │
//! │     explicit path, or the platform config dir (tienda.toml)             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                    │
//! │     every section enabled, "$" with 2 decimals                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # tienda.toml
//! [features]
//! enabled = ["inventory", "orders", "purchases"]
//!
//! [display]
//! currency_symbol = "$"
//! currency_decimals = 2
//! missing_amount = "-"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::features::FeatureStore;
use crate::money::to_minor_units;
use crate::types::AdminFeature;
use crate::ADMIN_SECTIONS;

/// Most decimals the display layer will render.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoreConfig {
    pub features: FeaturesConfig,
    pub display: DisplayConfig,
}

/// Which dashboard sections start enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Keys of the enabled sections. Unlisted sections start disabled.
    pub enabled: Vec<String>,
}

impl Default for FeaturesConfig {
    fn default() -> Self {
        FeaturesConfig {
            enabled: ADMIN_SECTIONS
                .iter()
                .map(|(key, _)| key.to_string())
                .collect(),
        }
    }
}

/// How amounts are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub currency_decimals: u8,
    /// Shown in place of an amount that is NaN or infinite.
    pub missing_amount: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            missing_amount: "-".to_string(),
        }
    }
}

impl CoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (tienda.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        debug!(
            enabled_sections = config.features.enabled.len(),
            currency = %config.display.currency_symbol,
            decimals = config.display.currency_decimals,
            "Dashboard config ready"
        );
        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load dashboard config, enabling every section");
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> Result<(), ConfigError> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(
            ?path,
            enabled_sections = self.features.enabled.len(),
            "Dashboard config saved"
        );
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(key) = self
            .features
            .enabled
            .iter()
            .find(|key| !ADMIN_SECTIONS.iter().any(|(known, _)| *known == key.as_str()))
        {
            return Err(ConfigError::Invalid {
                field: "features.enabled".into(),
                reason: format!("unknown section '{key}'"),
            });
        }

        if self.display.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::Invalid {
                field: "display.currency_decimals".into(),
                reason: format!("must be at most {MAX_CURRENCY_DECIMALS}"),
            });
        }

        Ok(())
    }

    /// Applies `TIENDA_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from any variable source.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(list) = lookup("TIENDA_FEATURES") {
            debug!(features = %list, "Overriding enabled features from environment");
            self.features.enabled = list
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(symbol) = lookup("TIENDA_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("TIENDA_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(decimals) => self.display.currency_decimals = decimals,
                Err(_) => warn!(value = %decimals, "Invalid TIENDA_CURRENCY_DECIMALS, ignoring"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tienda", "tienda")
            .map(|dirs| dirs.config_dir().join("tienda.toml"))
    }

    /// Builds the admin feature store for this configuration.
    ///
    /// Every dashboard section is present; only the configured ones start
    /// enabled.
    pub fn feature_store(&self) -> FeatureStore {
        let features = ADMIN_SECTIONS
            .iter()
            .map(|(key, label)| {
                let enabled = self.features.enabled.iter().any(|k| k == key);
                AdminFeature::new(*key, *label, enabled)
            })
            .collect();
        FeatureStore::new(features)
    }

    /// Formats an amount for display.
    ///
    /// NaN, infinite, and amounts too large to count in minor units render
    /// as `missing_amount`, so a broken input shows a placeholder instead
    /// of a made-up figure.
    ///
    /// ## Example
    /// ```rust
    /// use tienda_core::config::CoreConfig;
    ///
    /// let config = CoreConfig::default();
    /// assert_eq!(config.format_amount(1234.5), "$1234.50");
    /// assert_eq!(config.format_amount(-0.5), "-$0.50");
    /// assert_eq!(config.format_amount(f64::NAN), "-");
    /// ```
    pub fn format_amount(&self, amount: f64) -> String {
        let decimals = self.display.currency_decimals.min(MAX_CURRENCY_DECIMALS) as u32;
        let Some(minor) = to_minor_units(amount, decimals) else {
            return self.display.missing_amount.clone();
        };

        let divisor = 10_i64.pow(decimals);
        let whole = (minor / divisor).unsigned_abs();
        let frac = (minor % divisor).unsigned_abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.display.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole, frac, width = decimals as usize)
            } else {
                whole.to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tienda-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_defaults_enable_every_section() {
        let config = CoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.features.enabled.len(), ADMIN_SECTIONS.len());
        assert_eq!(config.display.currency_decimals, 2);
    }

    #[test]
    fn test_format_amount() {
        let config = CoreConfig::default();
        assert_eq!(config.format_amount(12.34), "$12.34");
        assert_eq!(config.format_amount(1.0), "$1.00");
        assert_eq!(config.format_amount(0.01), "$0.01");
        assert_eq!(config.format_amount(0.0), "$0.00");
        assert_eq!(config.format_amount(-12.34), "-$12.34");
    }

    #[test]
    fn test_format_amount_missing() {
        let mut config = CoreConfig::default();
        config.display.missing_amount = "N/D".to_string();
        assert_eq!(config.format_amount(f64::NAN), "N/D");
        assert_eq!(config.format_amount(f64::INFINITY), "N/D");
    }

    #[test]
    fn test_format_amount_beyond_minor_unit_range() {
        let config = CoreConfig::default();
        assert_eq!(config.format_amount(1e17), "-");
        assert_eq!(config.format_amount(1e300), "-");
        assert_eq!(config.format_amount(-1e300), "-");

        let mut whole_units = CoreConfig::default();
        whole_units.display.currency_decimals = 0;
        assert_eq!(whole_units.format_amount(-1e300), "-");
        assert_eq!(
            whole_units.format_amount(-9_223_372_036_854_775_808.0),
            "-$9223372036854775808"
        );
    }

    #[test]
    fn test_format_amount_without_decimals() {
        let mut config = CoreConfig::default();
        config.display.currency_symbol = "₡".to_string();
        config.display.currency_decimals = 0;
        assert_eq!(config.format_amount(1500.4), "₡1500");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TIENDA_FEATURES", "orders, invoices,,"),
            ("TIENDA_CURRENCY_SYMBOL", "€"),
            ("TIENDA_CURRENCY_DECIMALS", "3"),
        ]
        .into_iter()
        .collect();

        let mut config = CoreConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.features.enabled, vec!["orders", "invoices"]);
        assert_eq!(config.display.currency_symbol, "€");
        assert_eq!(config.display.currency_decimals, 3);
    }

    #[test]
    fn test_bad_decimals_override_is_ignored() {
        let mut config = CoreConfig::default();
        config.apply_overrides(|name| {
            (name == "TIENDA_CURRENCY_DECIMALS").then(|| "dos".to_string())
        });
        assert_eq!(config.display.currency_decimals, 2);
    }

    #[test]
    fn test_validate_rejects_unknown_section() {
        let mut config = CoreConfig::default();
        config.features.enabled.push("reports".to_string());
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == "features.enabled"));
    }

    #[test]
    fn test_validate_rejects_too_many_decimals() {
        let mut config = CoreConfig::default();
        config.display.currency_decimals = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_feature_store_from_config() {
        let mut config = CoreConfig::default();
        config.features.enabled = vec!["orders".to_string(), "users".to_string()];

        let store = config.feature_store();
        assert_eq!(store.get().len(), ADMIN_SECTIONS.len());
        assert!(store.is_enabled("orders"));
        assert!(store.is_enabled("users"));
        assert!(!store.is_enabled("inventory"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CoreConfig = toml::from_str("[display]\ncurrency_symbol = \"Q\"\n").unwrap();
        assert_eq!(config.display.currency_symbol, "Q");
        assert_eq!(config.display.currency_decimals, 2);
        assert_eq!(config.features, FeaturesConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        let mut config = CoreConfig::default();
        config.features.enabled = vec!["purchases".to_string()];
        config.display.currency_symbol = "S/".to_string();

        config.save(Some(path.clone())).unwrap();
        let loaded = CoreConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.features.enabled, vec!["purchases"]);
        assert_eq!(loaded.display.currency_symbol, "S/");
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = temp_path("invalid");
        std::fs::write(&path, "[features\nenabled = 3").unwrap();
        let result = CoreConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let path = temp_path("unknown-section");
        std::fs::write(&path, "[features]\nenabled = [\"reports\"]\n").unwrap();
        let config = CoreConfig::load_or_default(Some(path.clone()));
        std::fs::remove_file(&path).ok();

        assert_eq!(config, CoreConfig::default());
    }
}
