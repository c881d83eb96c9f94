use clap::Parser;
use std::io::{self, BufRead, Write};
use wallet_transfer::app::console::{self, Command, Step};
use wallet_transfer::config::{resolve_initial_balance, toml_config::TomlConfig};
use wallet_transfer::domain::ports::ConfigProvider;
use wallet_transfer::utils::error::ErrorSeverity;
use wallet_transfer::utils::{logger, validation::Validate};
use wallet_transfer::{CliConfig, WalletError, WalletScreen};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("❌ Failed to load config file: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let log_format = file_config
        .as_ref()
        .map(TomlConfig::log_format)
        .unwrap_or_default();
    logger::init_cli_logger(
        config.verbose,
        file_config.as_ref().and_then(TomlConfig::log_level),
        log_format,
    );

    tracing::info!("Starting wallet-transfer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let validated = config
        .validate()
        .and_then(|_| file_config.as_ref().map_or(Ok(()), |c| c.validate()));
    if let Err(e) = validated {
        fail(&e);
    }

    let mut providers: Vec<&dyn ConfigProvider> = Vec::new();
    providers.push(&config);
    if let Some(file_config) = &file_config {
        providers.push(file_config);
    }
    let initial_balance = match resolve_initial_balance(&providers) {
        Ok(balance) => balance,
        Err(e) => fail(&e),
    };
    tracing::info!("Initial balance: {}", initial_balance);

    let mut screen = WalletScreen::new(initial_balance);
    let mut stdout = io::stdout();
    println!("{}", console::render(&screen));
    println!("Type 'help' for commands.");
    print!("> ");
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        match console::execute(&mut screen, Command::parse(&line)) {
            Step::Quit => break,
            Step::Continue { reply, outcome } => {
                if let Some(reply) = reply {
                    println!("{}", reply);
                }
                if let (true, Some(outcome)) = (config.json, outcome) {
                    match console::outcome_json(&outcome) {
                        Ok(json) => println!("{}", json),
                        Err(e) => tracing::warn!("⚠️ {}", e.user_friendly_message()),
                    }
                }
                println!("{}", console::render(&screen));
            }
        }
        print!("> ");
        stdout.flush()?;
    }

    tracing::info!("Closing wallet-transfer with balance {}", screen.current_balance());
    Ok(())
}

fn fail(e: &WalletError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(exit_code(e));
}

fn exit_code(e: &WalletError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
