use std::str::FromStr;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use dialoguer::Input as DialoguerInput;

use crate::cli_utils::{CliError, CliResult};

/// Input utilities
pub struct Input;

impl Input {
    /// Get a string from user input
    pub fn get_string(prompt: &str) -> CliResult<String> {
        let value = DialoguerInput::new()
            .with_prompt(prompt)
            .interact_text()?;
        Ok(value)
    }

    /// Get an optional string, empty input means "keep"
    pub fn get_optional_string(prompt: &str) -> CliResult<Option<String>> {
        let input: String = DialoguerInput::new()
            .with_prompt(format!("{} (optional)", prompt))
            .allow_empty(true)
            .interact_text()?;

        Ok(if input.trim().is_empty() { None } else { Some(input) })
    }

    /// Get a decimal number
    pub fn get_decimal(prompt: &str) -> CliResult<BigDecimal> {
        let input = Self::get_string(prompt)?;
        parse_decimal(&input)
    }

    pub fn get_optional_decimal(prompt: &str) -> CliResult<Option<BigDecimal>> {
        Self::get_optional_string(prompt)?
            .map(|raw| parse_decimal(&raw))
            .transpose()
    }

    /// Get a date as YYYY-MM-DD, defaulting to `default`
    pub fn get_date(prompt: &str, default: NaiveDate) -> CliResult<NaiveDate> {
        let input: String = DialoguerInput::new()
            .with_prompt(prompt)
            .default(default.format("%Y-%m-%d").to_string())
            .interact_text()?;
        parse_date(&input)
    }

    pub fn get_optional_date(prompt: &str) -> CliResult<Option<NaiveDate>> {
        Self::get_optional_string(prompt)?
            .map(|raw| parse_date(&raw))
            .transpose()
    }

    /// Select from a list
    pub fn select_from_list(prompt: &str, items: Vec<String>, default: usize) -> CliResult<usize> {
        use dialoguer::Select;
        let idx = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(default)
            .interact()?;
        Ok(idx)
    }
}

fn parse_decimal(raw: &str) -> CliResult<BigDecimal> {
    BigDecimal::from_str(raw.trim())
        .map_err(|_| CliError::InvalidInput("not a decimal amount".to_string()))
}

fn parse_date(raw: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| CliError::InvalidInput("expected a date as YYYY-MM-DD".to_string()))
}
