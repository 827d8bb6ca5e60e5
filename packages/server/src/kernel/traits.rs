// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Worksheet layouts and record decoding live in domains/stories/models.
//
// Naming convention: Base* for trait names (e.g., BaseRowStore)

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Sheet row index of the header row. Data rows start right after it.
pub const HEADER_ROW: usize = 1;

/// Sheet row index of the first data row.
pub const FIRST_DATA_ROW: usize = HEADER_ROW + 1;

// =============================================================================
// Worksheet snapshot types
// =============================================================================

/// One data row, keyed by column header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// 1-based sheet row index (the header occupies row 1)
    pub index: usize,
    pub values: HashMap<String, String>,
}

impl SheetRow {
    /// Cell value under `column`, if the column exists
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Cell value under `column`, trimmed; `None` when absent or blank
    pub fn non_empty(&self, column: &str) -> Option<&str> {
        self.get(column).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Full scan of a worksheet: header row plus every data row in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<SheetRow>,
}

impl Sheet {
    /// Build a snapshot from raw cells. Short rows are padded with empty
    /// strings; cells beyond the header width are dropped.
    pub fn from_cells<I>(headers: Vec<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(offset, cells)| {
                let mut cells = cells.into_iter();
                let values = headers
                    .iter()
                    .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                    .collect();
                SheetRow {
                    index: FIRST_DATA_ROW + offset,
                    values,
                }
            })
            .collect();

        Self { headers, rows }
    }

    /// 1-based column index of `header`
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header).map(|i| i + 1)
    }

    /// Expected headers that the worksheet does not have
    pub fn missing_columns(&self, expected: &[&str]) -> Vec<String> {
        expected
            .iter()
            .filter(|column| !self.headers.iter().any(|h| h == *column))
            .map(|column| column.to_string())
            .collect()
    }
}

// =============================================================================
// Row Store Trait (Infrastructure - one handle per worksheet)
// =============================================================================

#[async_trait]
pub trait BaseRowStore: Send + Sync {
    /// Name of the worksheet this handle reads and writes
    fn worksheet(&self) -> &str;

    /// Full scan of the worksheet
    async fn list_rows(&self) -> Result<Sheet>;

    /// Append one row; `values` follow the worksheet's column order
    async fn append_row(&self, values: Vec<String>) -> Result<()>;

    /// Overwrite a single cell (1-based row and column, header is row 1)
    async fn update_cell(&self, row_index: usize, column_index: usize, value: String) -> Result<()>;
}
