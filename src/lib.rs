pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::wallet_screen::WalletScreen;
pub use crate::core::{
    accept, evaluate, Money, NumericInputFilter, ParseMoneyError, RejectReason, TransferOutcome,
    TransferRequest, TransferValidator,
};
pub use crate::utils::error::{Result, WalletError};
