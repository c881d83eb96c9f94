use crate::domain::model::{TransferOutcome, TransferRequest};

/// Decides whether a proposed field content may replace the current one.
pub trait InputFilter {
    fn accept(&self, candidate: &str) -> bool;
}

/// Turns a submitted form snapshot into an outcome. Implementations must be pure.
pub trait TransferPolicy {
    fn evaluate(&self, request: &TransferRequest) -> TransferOutcome;
}

/// Source of startup settings (command line, config file).
pub trait ConfigProvider {
    /// Raw seed balance text, if this source sets one.
    fn initial_balance(&self) -> Option<&str>;
}
