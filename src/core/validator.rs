use crate::domain::model::{RejectReason, TransferOutcome, TransferRequest};
use crate::domain::money::{Money, ParseMoneyError};
use crate::domain::ports::TransferPolicy;

/// Register-button rules for a single-balance wallet.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferValidator;

impl TransferPolicy for TransferValidator {
    fn evaluate(&self, request: &TransferRequest) -> TransferOutcome {
        evaluate(request)
    }
}

/// Decides a transfer. The checks run in a fixed order and the first failing
/// one is reported: recipient, amount syntax, amount sign, available funds.
pub fn evaluate(request: &TransferRequest) -> TransferOutcome {
    match checked_amount(request) {
        Ok(amount) => TransferOutcome::Committed {
            new_balance: request.current_balance - amount,
            amount,
            confirmation_text: format!("{} – {}", request.recipient_name, amount),
        },
        Err(reason) => TransferOutcome::Rejected { reason },
    }
}

fn checked_amount(request: &TransferRequest) -> Result<Money, RejectReason> {
    if request.recipient_name.trim().is_empty() {
        return Err(RejectReason::EmptyRecipient);
    }

    let amount = match Money::parse(&request.amount_text) {
        Ok(amount) => amount,
        Err(ParseMoneyError::NotANumber) => return Err(RejectReason::InvalidAmount),
        Err(ParseMoneyError::OutOfRange { negative: true }) => {
            return Err(RejectReason::NonPositiveAmount)
        }
        // larger than any balance Money can hold
        Err(ParseMoneyError::OutOfRange { negative: false }) => {
            return Err(RejectReason::InsufficientFunds {
                balance: request.current_balance,
            })
        }
    };

    if !amount.is_positive() {
        return Err(RejectReason::NonPositiveAmount);
    }

    if amount > request.current_balance {
        return Err(RejectReason::InsufficientFunds {
            balance: request.current_balance,
        });
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(recipient: &str, amount: &str, balance_cents: i64) -> TransferRequest {
        TransferRequest::new(recipient, amount, Money::from_cents(balance_cents))
    }

    #[test]
    fn test_blank_recipient_wins_over_bad_amount() {
        let outcome = evaluate(&request("   ", "abc", 10000));
        assert_eq!(outcome.rejection(), Some(&RejectReason::EmptyRecipient));
    }

    #[test]
    fn test_invalid_amount_before_sign_check() {
        assert_eq!(
            evaluate(&request("Ana", "", 10000)).rejection(),
            Some(&RejectReason::InvalidAmount)
        );
        assert_eq!(
            evaluate(&request("Ana", ".", 10000)).rejection(),
            Some(&RejectReason::InvalidAmount)
        );
    }

    #[test]
    fn test_amount_rounding_to_zero_is_not_positive() {
        assert_eq!(
            evaluate(&request("Ana", "0,004", 10000)).rejection(),
            Some(&RejectReason::NonPositiveAmount)
        );
        assert_eq!(
            evaluate(&request("Ana", "-5", 10000)).rejection(),
            Some(&RejectReason::NonPositiveAmount)
        );
    }

    #[test]
    fn test_insufficient_funds_reports_balance() {
        let outcome = evaluate(&request("Luis", "150", 10000));
        let reason = outcome.rejection().cloned().unwrap();
        assert_eq!(
            reason,
            RejectReason::InsufficientFunds {
                balance: Money::from_cents(10000)
            }
        );
        assert_eq!(reason.to_string(), "Fondos insuficientes. Saldo: S/ 100.00");
    }

    #[test]
    fn test_oversized_amount_is_insufficient_funds() {
        let huge = format!("1{}", "0".repeat(30));
        assert_eq!(
            evaluate(&request("Ana", &huge, 10000)).rejection(),
            Some(&RejectReason::InsufficientFunds {
                balance: Money::from_cents(10000)
            })
        );
        assert_eq!(
            evaluate(&request("Ana", &format!("-{}", huge), 10000)).rejection(),
            Some(&RejectReason::NonPositiveAmount)
        );
        assert_eq!(
            evaluate(&request("   ", &huge, 10000)).rejection(),
            Some(&RejectReason::EmptyRecipient)
        );
    }

    #[test]
    fn test_whole_balance_can_be_sent() {
        let outcome = evaluate(&request("Ana", "100,00", 10000));
        assert_eq!(outcome.balance_after(Money::from_cents(10000)), Money::zero());
    }

    #[test]
    fn test_comma_amount_is_committed() {
        match evaluate(&request("Ana", "1234,5", 500000)) {
            TransferOutcome::Committed {
                new_balance,
                amount,
                confirmation_text,
            } => {
                assert_eq!(amount, Money::from_cents(123450));
                assert_eq!(new_balance, Money::from_cents(376550));
                assert_eq!(confirmation_text, "Ana – S/ 1,234.50");
            }
            other => panic!("expected commit, got {:?}", other),
        }
    }
}
