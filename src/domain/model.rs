use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of the form taken at the moment the user presses register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub recipient_name: String,
    pub amount_text: String,
    pub current_balance: Money,
}

impl TransferRequest {
    pub fn new(
        recipient_name: impl Into<String>,
        amount_text: impl Into<String>,
        current_balance: Money,
    ) -> Self {
        Self {
            recipient_name: recipient_name.into(),
            amount_text: amount_text.into(),
            current_balance,
        }
    }
}

/// Why a transfer was refused. The `Display` text is what the form shows
/// under the amount field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    #[error("Ingresa el nombre del destinatario.")]
    EmptyRecipient,

    #[error("Ingresa un monto válido (número).")]
    InvalidAmount,

    #[error("El monto debe ser mayor que 0.")]
    NonPositiveAmount,

    #[error("Fondos insuficientes. Saldo: {balance}")]
    InsufficientFunds { balance: Money },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TransferOutcome {
    Rejected {
        reason: RejectReason,
    },
    Committed {
        new_balance: Money,
        amount: Money,
        confirmation_text: String,
    },
}

impl TransferOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, TransferOutcome::Committed { .. })
    }

    pub fn rejection(&self) -> Option<&RejectReason> {
        match self {
            TransferOutcome::Rejected { reason } => Some(reason),
            TransferOutcome::Committed { .. } => None,
        }
    }

    /// Balance the holder ends up with once this outcome is applied.
    pub fn balance_after(&self, current: Money) -> Money {
        match self {
            TransferOutcome::Committed { new_balance, .. } => *new_balance,
            TransferOutcome::Rejected { .. } => current,
        }
    }
}
