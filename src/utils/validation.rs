use crate::domain::money::{Money, ParseMoneyError};
use crate::utils::error::{WalletError, Result};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(WalletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(WalletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WalletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a seed balance. Unlike the balance field at runtime, a seed that is
/// not a number or is negative is refused instead of read as zero.
pub fn validate_seed_balance(field_name: &str, value: &str) -> Result<Money> {
    validate_non_empty_string(field_name, value)?;

    let balance = Money::parse(value).map_err(|e| WalletError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: match e {
            ParseMoneyError::NotANumber => {
                "Balance must be a decimal number such as 2000.00".to_string()
            }
            ParseMoneyError::OutOfRange { .. } => format!("Balance must not exceed {}", Money::max()),
        },
    })?;

    if balance.is_negative() {
        return Err(WalletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Balance cannot be negative".to_string(),
        });
    }

    Ok(balance)
}

/// Accepts a bare level (`info`, `debug`, `off`, ...). It is scoped to this
/// crate when the filter is built, so full directives are refused here.
pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_non_empty_string(field_name, level)?;

    LevelFilter::from_str(level.trim())
        .map(|_| ())
        .map_err(|e| WalletError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Expected a level such as info or debug: {}", e),
        })
}
