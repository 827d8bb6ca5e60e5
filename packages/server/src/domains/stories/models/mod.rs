pub mod story;
pub mod vote;

pub use story::*;
pub use vote::*;

use chrono::{DateTime, Utc};

use crate::common::{AppError, AppResult};
use crate::kernel::{BaseRowStore, Sheet, SheetRow};

/// Full scan of a worksheet, failing if any required column is missing
pub(crate) async fn read_sheet(store: &dyn BaseRowStore, required: &[&str]) -> AppResult<Sheet> {
    let sheet = store.list_rows().await?;

    let missing = sheet.missing_columns(required);
    if !missing.is_empty() {
        return Err(AppError::MissingColumns {
            worksheet: store.worksheet().to_string(),
            missing,
            available: sheet.headers.clone(),
        });
    }

    Ok(sheet)
}

/// Rows with no content at all (e.g. trailing rows left in a hand-edited sheet)
pub(crate) fn is_blank(row: &SheetRow) -> bool {
    row.values.values().all(|v| v.trim().is_empty())
}

pub(crate) fn invalid_row(store: &dyn BaseRowStore, row: &SheetRow, reason: impl Into<String>) -> AppError {
    AppError::InvalidRow {
        worksheet: store.worksheet().to_string(),
        row: row.index,
        reason: reason.into(),
    }
}

/// Timestamps are stored as RFC 3339; anything else is treated as absent
pub(crate) fn parse_timestamp(row: &SheetRow, column: &str) -> Option<DateTime<Utc>> {
    let raw = row.non_empty(column)?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(row = row.index, column, value = raw, error = %e, "Unparseable timestamp");
            None
        }
    }
}
