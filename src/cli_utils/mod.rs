// Prompts and terminal output for the finance dashboard
pub mod formatting;
pub mod input;
pub mod menu;

use colored::{Color, Colorize};

pub use formatting::{format_record, format_table};
pub use input::Input;
pub use menu::Menu;

pub type CliResult<T> = std::result::Result<T, CliError>;

/// Failures while collecting a budget or transaction from the terminal.
#[derive(Debug)]
pub enum CliError {
    /// Entered text does not parse as the requested value.
    InvalidInput(String),
    /// The prompt itself failed (closed terminal, interrupted read).
    Prompt(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}

fn notify(symbol: &str, message: &str, color: Color) {
    eprintln!("{}", format!("{} {}", symbol, message).color(color));
}

pub fn print_success(message: &str) {
    notify("✓", message, Color::Green);
}

pub fn print_info(message: &str) {
    notify("ℹ", message, Color::BrightCyan);
}

pub fn print_warning(message: &str) {
    notify("⚠", message, Color::Yellow);
}

pub fn print_error(message: &str) {
    notify("✗", message, Color::Red);
}
