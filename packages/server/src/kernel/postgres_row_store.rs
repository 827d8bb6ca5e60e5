//! Postgres-backed row store.
//!
//! Each worksheet is a header row in `worksheets` plus data rows in
//! `worksheet_rows`. A row's sheet index is its insertion position, so
//! appends are plain inserts and concurrent appends never overwrite each other.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;

use super::{BaseRowStore, Sheet, FIRST_DATA_ROW};

pub struct PostgresRowStore {
    pool: PgPool,
    worksheet: String,
}

impl PostgresRowStore {
    pub fn new(pool: PgPool, worksheet: impl Into<String>) -> Self {
        Self {
            pool,
            worksheet: worksheet.into(),
        }
    }

    /// Register the worksheet's header row if it does not exist yet.
    ///
    /// An existing header row is left untouched; reads report any columns it lacks.
    pub async fn ensure_worksheet(&self, headers: &[&str]) -> Result<()> {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        sqlx::query(
            "INSERT INTO worksheets (name, headers) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(&self.worksheet)
        .bind(&headers)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to register worksheet {}", self.worksheet))?;
        Ok(())
    }

    async fn column_count(&self) -> Result<usize> {
        let count: Option<(Option<i32>,)> =
            sqlx::query_as("SELECT cardinality(headers) FROM worksheets WHERE name = $1")
                .bind(&self.worksheet)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read headers of worksheet {}", self.worksheet))?;

        let (count,) = count.with_context(|| format!("Worksheet not found: {}", self.worksheet))?;
        // cardinality of an empty array is 0, of NULL is NULL
        Ok(count.map_or(0, |c| c.max(0) as usize))
    }
}

#[async_trait]
impl BaseRowStore for PostgresRowStore {
    fn worksheet(&self) -> &str {
        &self.worksheet
    }

    async fn list_rows(&self) -> Result<Sheet> {
        let headers: Option<(Vec<String>,)> =
            sqlx::query_as("SELECT headers FROM worksheets WHERE name = $1")
                .bind(&self.worksheet)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Failed to read headers of worksheet {}", self.worksheet))?;

        let (headers,) =
            headers.with_context(|| format!("Worksheet not found: {}", self.worksheet))?;

        let rows: Vec<(Vec<Option<String>>,)> =
            sqlx::query_as("SELECT cells FROM worksheet_rows WHERE worksheet = $1 ORDER BY id")
                .bind(&self.worksheet)
                .fetch_all(&self.pool)
                .await
                .with_context(|| format!("Failed to list rows of worksheet {}", self.worksheet))?;

        Ok(Sheet::from_cells(
            headers,
            rows.into_iter()
                .map(|(cells,)| {
                    cells
                        .into_iter()
                        .map(Option::unwrap_or_default)
                        .collect::<Vec<String>>()
                }),
        ))
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        let columns = self.column_count().await?;
        if values.len() > columns {
            bail!(
                "Row has {} cells but worksheet {} has {} columns",
                values.len(),
                self.worksheet,
                columns
            );
        }

        sqlx::query("INSERT INTO worksheet_rows (worksheet, cells) VALUES ($1, $2)")
            .bind(&self.worksheet)
            .bind(&values)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to append row to worksheet {}", self.worksheet))?;
        Ok(())
    }

    async fn update_cell(&self, row_index: usize, column_index: usize, value: String) -> Result<()> {
        let Some(offset) = row_index.checked_sub(FIRST_DATA_ROW) else {
            bail!("Row {} is not a data row", row_index);
        };
        if column_index == 0 {
            bail!("Column indexes start at 1");
        }
        let columns = self.column_count().await?;
        if column_index > columns {
            bail!("Column {} is outside worksheet {} ({} columns)", column_index, self.worksheet, columns);
        }

        let offset = i64::try_from(offset).context("Row index out of range")?;
        let column = i32::try_from(column_index).context("Column index out of range")?;

        let result = sqlx::query(
            r#"
            UPDATE worksheet_rows SET cells[$3] = $4
            WHERE id = (
                SELECT id FROM worksheet_rows
                WHERE worksheet = $1
                ORDER BY id
                OFFSET $2 LIMIT 1
            )
            "#,
        )
        .bind(&self.worksheet)
        .bind(offset)
        .bind(column)
        .bind(value)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to update cell in worksheet {}", self.worksheet))?;

        if result.rows_affected() == 0 {
            bail!("Row {} not found in worksheet {}", row_index, self.worksheet);
        }
        Ok(())
    }
}
