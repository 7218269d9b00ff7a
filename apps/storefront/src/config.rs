//! # Storefront Configuration
//!
//! Read once at startup, read-only afterwards, so no lock is needed.
//!
//! ## Environment Variables
//! ```text
//! ┌──────────────────────────────────────────┬───────────────────────────────┐
//! │ Variable                                 │ Default                       │
//! ├──────────────────────────────────────────┼───────────────────────────────┤
//! │ STOREFRONT_DATA_DIR                      │ platform data dir             │
//! │ STOREFRONT_CATALOG_DELAY_MS              │ 1000                          │
//! │ STOREFRONT_CURRENCY_SYMBOL               │ $                             │
//! │ STOREFRONT_FREE_SHIPPING_THRESHOLD_CENTS │ 10000 ($100.00)               │
//! │ STOREFRONT_FLAT_SHIPPING_CENTS           │ 999   ($9.99)                 │
//! │ STOREFRONT_TAX_RATE_BPS                  │ 800   (8%)                    │
//! └──────────────────────────────────────────┴───────────────────────────────┘
//! ```
//!
//! Platform data dir:
//! - **macOS**: `~/Library/Application Support/com.storefront.app`
//! - **Windows**: `%APPDATA%\storefront\app\data`
//! - **Linux**: `~/.local/share/app` (XDG)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use directories::ProjectDirs;
use serde::Serialize;
use storefront_core::{CheckoutPolicy, Money, TaxRate};
use thiserror::Error;

pub const ENV_DATA_DIR: &str = "STOREFRONT_DATA_DIR";
pub const ENV_CATALOG_DELAY_MS: &str = "STOREFRONT_CATALOG_DELAY_MS";
pub const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";
pub const ENV_FREE_SHIPPING_THRESHOLD_CENTS: &str = "STOREFRONT_FREE_SHIPPING_THRESHOLD_CENTS";
pub const ENV_FLAT_SHIPPING_CENTS: &str = "STOREFRONT_FLAT_SHIPPING_CENTS";
pub const ENV_TAX_RATE_BPS: &str = "STOREFRONT_TAX_RATE_BPS";

/// Simulated catalog latency.
pub const DEFAULT_CATALOG_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),

    #[error("Could not determine app data directory; set {ENV_DATA_DIR}")]
    NoDataDir,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Directory holding `cart.json` and `wishlist.json`.
    pub data_dir: PathBuf,

    /// Delay before the mock catalog answers.
    #[serde(skip)]
    pub catalog_delay: Duration,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    pub checkout: CheckoutPolicy,
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup(ENV_DATA_DIR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let defaults = CheckoutPolicy::default();
        let checkout = CheckoutPolicy {
            free_shipping_threshold: Money::from_cents(parse_or(
                &lookup,
                ENV_FREE_SHIPPING_THRESHOLD_CENTS,
                defaults.free_shipping_threshold.cents(),
            )?),
            flat_shipping: Money::from_cents(parse_or(
                &lookup,
                ENV_FLAT_SHIPPING_CENTS,
                defaults.flat_shipping.cents(),
            )?),
            tax_rate: TaxRate::from_bps(parse_or(&lookup, ENV_TAX_RATE_BPS, defaults.tax_rate.bps())?),
        };

        Ok(StorefrontConfig {
            data_dir,
            catalog_delay: Duration::from_millis(parse_or(
                &lookup,
                ENV_CATALOG_DELAY_MS,
                DEFAULT_CATALOG_DELAY_MS,
            )?),
            currency_symbol: lookup(ENV_CURRENCY_SYMBOL).unwrap_or_else(|| "$".to_string()),
            checkout,
        })
    }

    /// Formats an amount for display, e.g. `$299.99` or `-$5.00`.
    pub fn format_currency(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "storefront", "app")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[(ENV_DATA_DIR, "/tmp/storefront")]).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/storefront"));
        assert_eq!(config.catalog_delay, Duration::from_millis(1000));
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.checkout, CheckoutPolicy::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[
            (ENV_DATA_DIR, "/data"),
            (ENV_CATALOG_DELAY_MS, "0"),
            (ENV_CURRENCY_SYMBOL, "€"),
            (ENV_FREE_SHIPPING_THRESHOLD_CENTS, "5000"),
            (ENV_FLAT_SHIPPING_CENTS, " 499 "),
            (ENV_TAX_RATE_BPS, "2000"),
        ])
        .unwrap();

        assert_eq!(config.catalog_delay, Duration::ZERO);
        assert_eq!(config.checkout.free_shipping_threshold, Money::from_cents(5000));
        assert_eq!(config.checkout.flat_shipping, Money::from_cents(499));
        assert_eq!(config.checkout.tax_rate, TaxRate::from_bps(2000));
        assert_eq!(config.format_currency(Money::from_cents(1050)), "€10.50");
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = config_with(&[(ENV_DATA_DIR, "/data"), (ENV_CATALOG_DELAY_MS, "soon")])
            .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == ENV_CATALOG_DELAY_MS));
    }

    #[test]
    fn test_format_currency() {
        let config = config_with(&[(ENV_DATA_DIR, "/data")]).unwrap();

        assert_eq!(config.format_currency(Money::from_cents(29999)), "$299.99");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-500)), "-$5.00");
    }
}
