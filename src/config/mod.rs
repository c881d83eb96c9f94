pub mod toml_config;

use crate::domain::money::Money;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation;

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Seed shown in the balance field when nothing else is configured.
pub const DEFAULT_INITIAL_BALANCE: &str = "2000.00";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "wallet-transfer")]
#[command(about = "Single-screen balance transfer form")]
pub struct CliConfig {
    #[arg(long, help = "Initial balance (overrides the config file)")]
    pub balance: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Print every register outcome as JSON")]
    pub json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn initial_balance(&self) -> Option<&str> {
        self.balance.as_deref()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(balance) = &self.balance {
            validation::validate_seed_balance("--balance", balance)?;
        }
        if let Some(path) = &self.config {
            validation::validate_path("--config", path)?;
        }
        Ok(())
    }
}

/// Picks the seed balance from the first provider that sets one, falling back
/// to [`DEFAULT_INITIAL_BALANCE`]. Providers are listed highest priority first.
pub fn resolve_initial_balance(providers: &[&dyn ConfigProvider]) -> Result<Money> {
    match providers.iter().find_map(|p| p.initial_balance()) {
        Some(text) => validation::validate_seed_balance("initial_balance", text),
        None => validation::validate_seed_balance("initial_balance", DEFAULT_INITIAL_BALANCE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TomlConfig;

    #[test]
    fn test_default_seed() {
        assert_eq!(resolve_initial_balance(&[]).unwrap(), Money::from_cents(200000));
    }

    #[test]
    fn test_first_provider_wins() {
        let file = TomlConfig::from_toml_str("[wallet]\ninitial_balance = \"50\"\n").unwrap();
        let empty = TomlConfig::default();
        assert_eq!(
            resolve_initial_balance(&[&empty, &file]).unwrap(),
            Money::from_cents(5000)
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_balance_overrides_file() {
        let cli = CliConfig {
            balance: Some("10.5".to_string()),
            ..CliConfig::default()
        };
        let file = TomlConfig::from_toml_str("[wallet]\ninitial_balance = \"50\"\n").unwrap();
        assert_eq!(
            resolve_initial_balance(&[&cli, &file]).unwrap(),
            Money::from_cents(1050)
        );
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_validation() {
        let cli = CliConfig {
            balance: Some("-3".to_string()),
            ..CliConfig::default()
        };
        assert!(cli.validate().is_err());

        let cli = CliConfig::parse_from(["wallet-transfer", "--balance", "99,99", "--json"]);
        assert!(cli.json);
        assert!(cli.validate().is_ok());
    }
}
