use crate::app::wallet_screen::WalletScreen;
use crate::core::{InputFilter, TransferOutcome, TransferPolicy};
use crate::utils::error::Result;

pub const HELP_TEXT: &str = "\
Commands:
  balance <amount>   retype the balance field
  to <name>          set the recipient
  amount <amount>    retype the amount to send
  register           submit the transfer
  show               redraw the form
  help               show this help
  quit               leave";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Balance(String),
    Recipient(String),
    Amount(String),
    Register,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Command::Empty,
            "balance" | "saldo" => Command::Balance(rest.to_string()),
            "to" | "para" => Command::Recipient(rest.to_string()),
            "amount" | "monto" => Command::Amount(rest.to_string()),
            "register" | "registrar" => Command::Register,
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue {
        reply: Option<String>,
        outcome: Option<TransferOutcome>,
    },
    Quit,
}

impl Step {
    fn reply(text: impl Into<String>) -> Self {
        Step::Continue {
            reply: Some(text.into()),
            outcome: None,
        }
    }

    fn silent() -> Self {
        Step::Continue {
            reply: None,
            outcome: None,
        }
    }
}

/// Applies a command to the screen the way the form's widgets would: numeric
/// fields are cleared and retyped key by key, so malformed keys are dropped.
pub fn execute<P: TransferPolicy, F: InputFilter>(
    screen: &mut WalletScreen<P, F>,
    command: Command,
) -> Step {
    match command {
        Command::Balance(text) => {
            screen.clear_balance();
            let dropped = screen.type_into_balance(&text);
            if dropped > 0 {
                tracing::debug!("Dropped {} keystroke(s) in balance field", dropped);
            }
            Step::silent()
        }
        Command::Recipient(name) => {
            screen.edit_recipient(name);
            Step::silent()
        }
        Command::Amount(text) => {
            screen.clear_amount();
            let dropped = screen.type_into_amount(&text);
            if dropped > 0 {
                tracing::debug!("Dropped {} keystroke(s) in amount field", dropped);
            }
            Step::silent()
        }
        Command::Register => Step::Continue {
            reply: None,
            outcome: Some(screen.submit()),
        },
        Command::Show | Command::Empty => Step::silent(),
        Command::Help => Step::reply(HELP_TEXT),
        Command::Quit => Step::Quit,
        Command::Unknown(word) => {
            Step::reply(format!("Unknown command '{}'. Type 'help' for the list.", word))
        }
    }
}

pub fn render<P: TransferPolicy, F: InputFilter>(screen: &WalletScreen<P, F>) -> String {
    let mut view = format!(
        "Billetera\n  Saldo:        {}  [{}]\n  Destinatario: {}\n  Monto:        {}\n",
        screen.current_balance(),
        screen.balance_text(),
        screen.recipient(),
        screen.amount_text()
    );
    if let Some(error) = screen.error() {
        view.push_str(&format!("  ! {}\n", error));
    }
    if !screen.message().is_empty() {
        view.push_str(&format!("  {}\n", screen.message()));
    }
    view
}

pub fn outcome_json(outcome: &TransferOutcome) -> Result<String> {
    Ok(serde_json::to_string(outcome)?)
}
