use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl WalletError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WalletError::IoError(_) => ErrorCategory::Io,
            WalletError::SerializationError(_) => ErrorCategory::Serialization,
            WalletError::TomlError(_)
            | WalletError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Serialization => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            WalletError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            WalletError::TomlError(_) => {
                "Fix the TOML syntax in the configuration file".to_string()
            }
            WalletError::SerializationError(_) => {
                "Retry without --json or report the outcome that failed".to_string()
            }
            WalletError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            WalletError::IoError(e) => format!("Could not read a required file: {}", e),
            WalletError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            WalletError::SerializationError(_) => "Could not encode the outcome".to_string(),
            WalletError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WalletError>;
