use crate::core::{
    InputFilter, Money, NumericInputFilter, ParseMoneyError, TransferOutcome, TransferPolicy,
    TransferRequest, TransferValidator,
};

/// Prefix of the line shown under the form after a committed transfer.
pub const CONFIRMATION_PREFIX: &str = "Se envió: ";

/// State of the transfer form as its shell sees it: raw field texts, the
/// last confirmation line and the error shown under the amount field.
///
/// The numeric fields only change through the input filter, and the balance
/// only shrinks through a committed outcome from the policy.
#[derive(Debug, Clone)]
pub struct WalletScreen<P: TransferPolicy = TransferValidator, F: InputFilter = NumericInputFilter> {
    balance_text: String,
    recipient: String,
    amount_text: String,
    message: String,
    error: Option<String>,
    policy: P,
    filter: F,
}

impl WalletScreen {
    pub fn new(initial_balance: Money) -> Self {
        Self::with_parts(initial_balance, TransferValidator, NumericInputFilter)
    }
}

impl<P: TransferPolicy, F: InputFilter> WalletScreen<P, F> {
    pub fn with_parts(initial_balance: Money, policy: P, filter: F) -> Self {
        Self {
            balance_text: initial_balance.to_plain_string(),
            recipient: String::new(),
            amount_text: String::new(),
            message: String::new(),
            error: None,
            policy,
            filter,
        }
    }

    pub fn balance_text(&self) -> &str {
        &self.balance_text
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Balance as currently typed. A field that does not hold a number reads
    /// as zero; one too large for [`Money`] reads as [`Money::max`].
    pub fn current_balance(&self) -> Money {
        match Money::parse(&self.balance_text) {
            Ok(balance) if !balance.is_negative() => balance,
            Err(ParseMoneyError::OutOfRange { negative: false }) => Money::max(),
            _ => Money::zero(),
        }
    }

    pub fn edit_balance(&mut self, candidate: &str) -> bool {
        replace_if_accepted(&self.filter, &mut self.balance_text, candidate)
    }

    pub fn edit_amount(&mut self, candidate: &str) -> bool {
        replace_if_accepted(&self.filter, &mut self.amount_text, candidate)
    }

    pub fn edit_recipient(&mut self, text: impl Into<String>) {
        self.recipient = text.into();
    }

    /// Appends keystrokes one by one; returns how many were dropped.
    pub fn type_into_balance(&mut self, keys: &str) -> usize {
        type_keys(&self.filter, &mut self.balance_text, keys)
    }

    pub fn type_into_amount(&mut self, keys: &str) -> usize {
        type_keys(&self.filter, &mut self.amount_text, keys)
    }

    pub fn clear_balance(&mut self) {
        self.balance_text.clear();
    }

    pub fn clear_amount(&mut self) {
        self.amount_text.clear();
    }

    /// Presses register: evaluates a snapshot of the form and applies the outcome.
    pub fn submit(&mut self) -> TransferOutcome {
        self.error = None;

        let request = TransferRequest::new(
            self.recipient.clone(),
            self.amount_text.clone(),
            self.current_balance(),
        );
        let outcome = self.policy.evaluate(&request);

        match &outcome {
            TransferOutcome::Committed {
                new_balance,
                amount,
                confirmation_text,
            } => {
                tracing::info!(
                    "💸 Transfer committed: {} to '{}', balance {} -> {}",
                    amount,
                    request.recipient_name,
                    request.current_balance,
                    new_balance
                );
                self.balance_text = new_balance.to_plain_string();
                self.message = format!("{}{}", CONFIRMATION_PREFIX, confirmation_text);
                self.amount_text.clear();
            }
            TransferOutcome::Rejected { reason } => {
                tracing::debug!("Transfer rejected: {:?}", reason);
                self.error = Some(reason.to_string());
            }
        }

        outcome
    }
}

fn replace_if_accepted<F: InputFilter>(filter: &F, field: &mut String, candidate: &str) -> bool {
    if !filter.accept(candidate) {
        return false;
    }
    field.clear();
    field.push_str(candidate);
    true
}

fn type_keys<F: InputFilter>(filter: &F, field: &mut String, keys: &str) -> usize {
    let mut dropped = 0;
    for key in keys.chars() {
        let mut candidate = field.clone();
        candidate.push(key);
        if !replace_if_accepted(filter, field, &candidate) {
            dropped += 1;
        }
    }
    dropped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RejectReason;

    #[test]
    fn test_seed_is_rendered_plain() {
        let screen = WalletScreen::new(Money::from_cents(200000));
        assert_eq!(screen.balance_text(), "2000.00");
        assert_eq!(screen.current_balance(), Money::from_cents(200000));
    }

    #[test]
    fn test_typing_drops_rejected_keystrokes() {
        let mut screen = WalletScreen::new(Money::zero());
        assert_eq!(screen.type_into_amount("12,555"), 1);
        assert_eq!(screen.amount_text(), "12,55");
        assert_eq!(screen.type_into_amount("x"), 1);
        assert_eq!(screen.amount_text(), "12,55");
    }

    #[test]
    fn test_empty_balance_field_reads_as_zero() {
        let mut screen = WalletScreen::new(Money::from_cents(10000));
        screen.clear_balance();
        assert_eq!(screen.current_balance(), Money::zero());
        screen.edit_recipient("Ana");
        screen.edit_amount("1");
        assert_eq!(
            screen.submit().rejection(),
            Some(&RejectReason::InsufficientFunds {
                balance: Money::zero()
            })
        );
    }

    #[test]
    fn test_oversized_balance_field_saturates() {
        let mut screen = WalletScreen::new(Money::zero());
        screen.clear_balance();
        assert_eq!(screen.type_into_balance(&format!("1{}", "0".repeat(29))), 0);
        assert_eq!(screen.current_balance(), Money::max());

        screen.edit_recipient("Ana");
        screen.edit_amount("5");
        assert!(screen.submit().is_committed());
        assert_eq!(screen.balance_text(), "792281625142643375935439498.35");
    }

    #[test]
    fn test_error_is_cleared_on_next_submit() {
        let mut screen = WalletScreen::new(Money::from_cents(10000));
        screen.edit_amount("10");
        screen.submit();
        assert_eq!(screen.error(), Some("Ingresa el nombre del destinatario."));

        screen.edit_recipient("Ana");
        assert!(screen.submit().is_committed());
        assert_eq!(screen.error(), None);
        assert_eq!(screen.message(), "Se envió: Ana – S/ 10.00");
        assert_eq!(screen.recipient(), "Ana");
    }
}
