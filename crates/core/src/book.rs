//! Creation-input validation for books.
//!
//! The wire format is deliberately loose (the frontend sends `ano` as a
//! number or a string, fields may be absent entirely), so the raw request
//! is checked here, at the service boundary, before any datastore call.
//! The current calendar year is passed in by the caller rather than read
//! ambiently, which lets tests pin the upper year bound.

use serde::Deserialize;

use crate::error::CoreError;

/// Oldest publication year accepted.
pub const MIN_YEAR: i32 = 1000;

/// Newest publication year accepted: next year's releases are fine.
pub fn max_year(current_year: i32) -> i32 {
    current_year + 1
}

/// A publication year as it arrives on the wire: JSON number or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Int(i64),
    Text(String),
}

impl YearInput {
    /// Whether the raw value counts as present for the required-fields check.
    fn is_present(&self) -> bool {
        match self {
            YearInput::Int(_) => true,
            YearInput::Text(s) => !s.trim().is_empty(),
        }
    }

    /// Parse into an integer year, if the value is numeric at all.
    fn parse(&self) -> Option<i64> {
        match self {
            YearInput::Int(n) => Some(*n),
            YearInput::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A validated creation payload: trimmed fields, in-range year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub titulo: String,
    pub autor: String,
    pub ano: i32,
}

/// Validate raw creation input.
///
/// Checks run in order: presence of all three fields first, then year
/// parsing and range. The first failure wins; nothing is persisted on
/// failure.
pub fn validate_new_book(
    titulo: Option<&str>,
    autor: Option<&str>,
    ano: Option<&YearInput>,
    current_year: i32,
) -> Result<NewBook, CoreError> {
    let titulo = titulo.map(str::trim).unwrap_or_default();
    let autor = autor.map(str::trim).unwrap_or_default();

    if titulo.is_empty() || autor.is_empty() || !ano.is_some_and(YearInput::is_present) {
        return Err(CoreError::Validation(
            "Title, author and year are required".to_string(),
        ));
    }

    let max = max_year(current_year);
    let ano = ano
        .and_then(YearInput::parse)
        .filter(|&n| n >= i64::from(MIN_YEAR) && n <= i64::from(max))
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Year must be a number between {MIN_YEAR} and {max}"
            ))
        })?;

    Ok(NewBook {
        titulo: titulo.to_string(),
        autor: autor.to_string(),
        ano: ano as i32,
    })
}
