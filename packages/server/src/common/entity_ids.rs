//! Identifier types for worksheet records.
//!
//! Story identifiers are chosen by the person registering the story
//! (e.g. `HU-100`), so unlike database keys they are free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

use super::AppError;

/// Identifier of a user story ("HU"), unique within the story worksheet.
///
/// Always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(String);

impl StoryId {
    /// Parse a raw identifier from a form field, query string or worksheet cell.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::required("ID da HU"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StoryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for StoryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
