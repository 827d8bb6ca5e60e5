//! In-process row store for local runs (`ROW_STORE=memory`) and tests.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use super::{BaseRowStore, Sheet, FIRST_DATA_ROW};

struct Cells {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

pub struct MemoryRowStore {
    worksheet: String,
    cells: Mutex<Cells>,
}

impl MemoryRowStore {
    pub fn new(worksheet: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            worksheet: worksheet.into(),
            cells: Mutex::new(Cells {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                rows: Vec::new(),
            }),
        }
    }

    /// Seed existing data rows (e.g. a sheet imported by hand)
    pub fn with_rows(self, rows: Vec<Vec<&str>>) -> Self {
        if let Ok(mut cells) = self.cells.lock() {
            cells
                .rows
                .extend(rows.into_iter().map(|r| r.into_iter().map(String::from).collect()));
        }
        self
    }

    /// Number of data rows currently stored
    pub fn row_count(&self) -> usize {
        self.cells.lock().map(|c| c.rows.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Cells>> {
        self.cells
            .lock()
            .map_err(|_| anyhow!("Worksheet {} lock poisoned", self.worksheet))
    }
}

#[async_trait]
impl BaseRowStore for MemoryRowStore {
    fn worksheet(&self) -> &str {
        &self.worksheet
    }

    async fn list_rows(&self) -> Result<Sheet> {
        let cells = self.lock()?;
        Ok(Sheet::from_cells(cells.headers.clone(), cells.rows.clone()))
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        let mut cells = self.lock()?;
        if values.len() > cells.headers.len() {
            bail!(
                "Row has {} cells but worksheet {} has {} columns",
                values.len(),
                self.worksheet,
                cells.headers.len()
            );
        }
        cells.rows.push(values);
        Ok(())
    }

    async fn update_cell(&self, row_index: usize, column_index: usize, value: String) -> Result<()> {
        let mut cells = self.lock()?;
        let width = cells.headers.len();
        if column_index == 0 || column_index > width {
            bail!(
                "Column {} out of range for worksheet {}",
                column_index,
                self.worksheet
            );
        }

        let row = row_index
            .checked_sub(FIRST_DATA_ROW)
            .and_then(|offset| cells.rows.get_mut(offset))
            .ok_or_else(|| anyhow!("Row {} not found in worksheet {}", row_index, self.worksheet))?;

        if row.len() < column_index {
            row.resize(column_index, String::new());
        }
        row[column_index - 1] = value;
        Ok(())
    }
}
