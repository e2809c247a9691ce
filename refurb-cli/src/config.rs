//! Configuration module
//!
//! Handles CLI configuration: where documents and exports live and the
//! charges the session starts with.

use refurb_core::pricing::PricingRule;
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding details.json, job_history.json and asset_history.json
    pub data_dir: PathBuf,

    /// Directory receiving spreadsheet exports
    pub export_dir: PathBuf,

    /// Charges applied when a job is closed
    pub pricing: PricingRule,
}

impl Config {
    /// Creates a configuration with default charges
    pub fn new(data_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            export_dir: export_dir.into(),
            pricing: PricingRule::default(),
        }
    }

    /// Replaces the starting charges
    pub fn with_pricing(mut self, pricing: PricingRule) -> Self {
        self.pricing = pricing;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("data_dir cannot be empty");
        }

        if self.export_dir.as_os_str().is_empty() {
            anyhow::bail!("export_dir cannot be empty");
        }

        validate_pricing(&self.pricing)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(".", ".")
    }
}

/// Charges must not be negative
pub fn validate_pricing(pricing: &PricingRule) -> anyhow::Result<()> {
    if pricing.desktop_charge.is_sign_negative() {
        anyhow::bail!("desktop_charge cannot be negative");
    }

    if pricing.wipe_charge.is_sign_negative() {
        anyhow::bail!("wipe_charge cannot be negative");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.pricing, PricingRule::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Empty data dir should fail
        config.data_dir = PathBuf::new();
        assert!(config.validate().is_err());

        config.data_dir = PathBuf::from("/tmp/refurb");
        assert!(config.validate().is_ok());

        // Negative charges should fail
        config.pricing.wipe_charge = Decimal::new(-1, 0);
        assert!(config.validate().is_err());

        config.pricing.wipe_charge = Decimal::ZERO;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_pricing() {
        let pricing = PricingRule::new(Decimal::new(8, 0), Decimal::new(10, 0));
        let config = Config::new("data", "exports").with_pricing(pricing);

        assert_eq!(config.pricing, pricing);
        assert_eq!(config.export_dir, PathBuf::from("exports"));
    }
}
