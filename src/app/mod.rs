pub mod console;
pub mod wallet_screen;
