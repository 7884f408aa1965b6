use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::errors::IntakeError;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, IntakeError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(IntakeError::from)
}

/// Prompt for required free-form text.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, IntakeError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(IntakeError::from)
}

/// Prompt for optional free-form text; an empty entry becomes `None`.
pub fn prompt_optional_text(
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>, IntakeError> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(format!("{} (optional)", prompt))
        .allow_empty(true)
        .interact_text()?;
    let trimmed = value.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// Prompt for a non-negative amount.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, IntakeError> {
    Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if *value >= 0.0 {
                Ok(())
            } else {
                Err("Amount must be zero or positive")
            }
        })
        .interact_text()
        .map_err(IntakeError::from)
}

/// Prompt for a whole number of bytes.
pub fn prompt_bytes(theme: &ColorfulTheme, prompt: &str) -> Result<u64, IntakeError> {
    Input::<u64>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(IntakeError::from)
}

/// Prompt for an optional `YYYY-MM-DD` date; empty entry becomes `None`.
pub fn prompt_optional_date(
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<NaiveDate>, IntakeError> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(format!("{} (YYYY-MM-DD, optional)", prompt))
        .allow_empty(true)
        .validate_with(|input: &String| {
            let trimmed = input.trim();
            if trimmed.is_empty() || NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok() {
                Ok(())
            } else {
                Err("Use YYYY-MM-DD format")
            }
        })
        .interact_text()?;
    let trimmed = value.trim();
    Ok(NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok())
}

/// Show a selection menu and return the chosen index.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
    default: usize,
) -> Result<usize, IntakeError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(IntakeError::from)
}
