//! Validation of user-entered number lists.

use thiserror::Error;

/// Reasons raw text cannot be sorted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Enter numbers")]
    EmptyInput,
    #[error("'{0}' not a number")]
    InvalidToken(String),
    #[error("No numbers found")]
    NoNumbersFound,
    #[error("Too many numbers ({count}, at most {max})")]
    TooManyValues { count: usize, max: usize },
}

/// Parse comma-separated numbers.
///
/// Tokens are trimmed and empty tokens (from `1,,2` or a trailing comma)
/// are skipped. Integers and decimals are accepted; `NaN` and infinities
/// are rejected since they have no place in an ordering.
pub fn parse_numbers(text: &str) -> Result<Vec<f64>, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }

    let mut values = Vec::new();
    for token in text.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => return Err(InputError::InvalidToken(token.to_string())),
        }
    }

    if values.is_empty() {
        return Err(InputError::NoNumbersFound);
    }
    Ok(values)
}

/// Parse like [`parse_numbers`], additionally capping how many values are accepted
pub fn parse_numbers_limited(text: &str, max: Option<usize>) -> Result<Vec<f64>, InputError> {
    let values = parse_numbers(text)?;
    match max {
        Some(max) if values.len() > max => Err(InputError::TooManyValues {
            count: values.len(),
            max,
        }),
        _ => Ok(values),
    }
}
