//! Input validation helpers shared by both tools.

use crate::libs::error::AppError;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompt;
use crate::msg_error;
use anyhow::Result;
use chrono::NaiveDate;

pub const ID_LENGTH: usize = 4;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Checks that `value` is made of ASCII digits only and, when `length` is set,
/// has exactly that many of them.
pub fn validate_integer(value: &str, length: Option<usize>) -> Result<u32, AppError> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Validation(Message::InputMustBeNumber.to_string()));
    }
    if let Some(length) = length {
        if value.len() != length {
            return Err(AppError::Validation(Message::InputMustHaveDigits(length).to_string()));
        }
    }
    value.parse::<u32>().map_err(|_| AppError::Validation(Message::InputTooLarge.to_string()))
}

/// Prompts until the answer passes [`validate_integer`].
///
/// Rejected answers are reported and asked again; only a prompt failure
/// (closed input) ends the loop.
pub fn get_valid_integer(prompt: &mut dyn Prompt, text: &str, length: Option<usize>) -> Result<u32> {
    loop {
        let value = prompt.input(text)?;
        match validate_integer(&value, length) {
            Ok(number) => return Ok(number),
            Err(e) => msg_error!(e),
        }
    }
}

pub fn get_valid_id(prompt: &mut dyn Prompt, text: &str) -> Result<u32> {
    get_valid_integer(prompt, text, Some(ID_LENGTH))
}

/// Prompts until a non-blank answer is given, returning it trimmed.
pub fn get_non_empty(prompt: &mut dyn Prompt, text: &str) -> Result<String> {
    loop {
        let value = prompt.input(text)?;
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_string());
        }
        msg_error!(Message::InputRequired);
    }
}

/// Prompts until the answer is a valid `YYYY-MM-DD` date.
pub fn get_valid_date(prompt: &mut dyn Prompt, text: &str) -> Result<NaiveDate> {
    loop {
        let value = prompt.input(text)?;
        match parse_date(&value) {
            Ok(date) => return Ok(date),
            Err(e) => msg_error!(e),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| AppError::InvalidDate(value.trim().to_string()))
}
