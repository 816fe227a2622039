use chrono::{Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input};

use crate::core::errors::CliError;
use crate::domain::record::STORE_DATE_FORMAT;

/// Prompt for a calendar date, defaulting to today.
pub fn prompt_date(theme: &ColorfulTheme, prompt: &str) -> Result<NaiveDate, CliError> {
    let today = Local::now().date_naive();
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} (YYYY-MM-DD)"))
        .default(today.format(STORE_DATE_FORMAT).to_string())
        .validate_with(|value: &String| {
            NaiveDate::parse_from_str(value.trim(), STORE_DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| "enter a date as YYYY-MM-DD")
        })
        .interact_text()?;
    NaiveDate::parse_from_str(raw.trim(), STORE_DATE_FORMAT)
        .map_err(|err| CliError::Input(err.to_string()))
}

/// Prompt for a required free-form text value.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

/// Prompt for optional text; empty input is allowed.
pub fn prompt_optional(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Prompt for a non-negative monetary amount.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    let amount: f64 = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("amount must be non-negative")
            }
        })
        .interact_text()?;
    Ok(amount)
}
