//! Story actions
//!
//! Entry-point actions are called directly from the HTTP routes.
//! They do the work synchronously and return values.
//!
//! Every action that reports a status recomputes it from the vote worksheet;
//! the story worksheet's cached status cell is only written, never trusted.

mod register;
mod review;
mod vote;

pub use register::*;
pub use review::*;
pub use vote::*;

use crate::common::{AppError, AppResult};

/// Trim a required form field, failing when it is blank
pub(crate) fn required_field(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::required(field));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional form field; blank becomes `None`
pub(crate) fn optional_field(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
