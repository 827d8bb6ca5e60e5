use chrono::{DateTime, SecondsFormat, Utc};
use typed_builder::TypedBuilder;

use super::{invalid_row, is_blank, parse_timestamp, read_sheet};
use crate::common::{AppError, AppResult, StoryId};
use crate::domains::tally::AggregateStatus;
use crate::kernel::{BaseRowStore, SheetRow};

/// Column headers of the story worksheet
pub mod columns {
    pub const ID: &str = "ID_HU";
    pub const TITLE: &str = "Título";
    pub const PROJECT: &str = "Projeto";
    pub const LINK: &str = "Link";
    pub const STATUS: &str = "Status";
    pub const CREATED_AT: &str = "Criado em";
    pub const OWNER: &str = "Responsável";
}

/// Column order used when appending stories
pub const STORY_COLUMNS: [&str; 7] = [
    columns::ID,
    columns::TITLE,
    columns::PROJECT,
    columns::LINK,
    columns::STATUS,
    columns::CREATED_AT,
    columns::OWNER,
];

/// Columns a story worksheet must have to be readable. The rest are optional
/// so sheets kept by hand before this service existed still load.
pub const REQUIRED_STORY_COLUMNS: [&str; 4] =
    [columns::ID, columns::TITLE, columns::LINK, columns::STATUS];

/// Story - a user story ("HU") awaiting stakeholder decisions
#[derive(Debug, Clone)]
pub struct Story {
    pub id: StoryId,
    pub title: String,
    pub project: String,
    /// External document, stored and forwarded as an opaque URL
    pub document_link: String,
    /// Status last written to the worksheet. A hint only; read paths recompute.
    pub cached_status: Option<AggregateStatus>,
    pub created_at: Option<DateTime<Utc>>,
    pub owner: Option<String>,

    row_index: usize,
    status_column: usize,
}

/// Fields of a story about to be registered
#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct NewStory {
    pub id: StoryId,
    pub title: String,
    pub project: String,
    pub document_link: String,
    #[builder(default)]
    pub owner: Option<String>,
}

/// Whether a document link uses a scheme safe to embed (`http` or `https`)
pub fn is_web_link(link: &str) -> bool {
    let link = link.trim();
    ["http://", "https://"].iter().any(|scheme| {
        link.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl Story {
    fn from_row(row: &SheetRow, status_column: usize, store: &dyn BaseRowStore) -> AppResult<Self> {
        let id = row
            .non_empty(columns::ID)
            .ok_or_else(|| invalid_row(store, row, "ID_HU vazio"))?;

        let cached_status = row.non_empty(columns::STATUS).and_then(|raw| {
            raw.parse::<AggregateStatus>()
                .map_err(|e| tracing::warn!(row = row.index, error = %e, "Ignoring cached status"))
                .ok()
        });

        Ok(Self {
            id: StoryId::parse(id)?,
            title: row.get(columns::TITLE).unwrap_or_default().trim().to_string(),
            project: row.get(columns::PROJECT).unwrap_or_default().trim().to_string(),
            document_link: row.get(columns::LINK).unwrap_or_default().trim().to_string(),
            cached_status,
            created_at: parse_timestamp(row, columns::CREATED_AT),
            owner: row.non_empty(columns::OWNER).map(String::from),
            row_index: row.index,
            status_column,
        })
    }

    /// Sheet row this story was read from
    pub fn row_index(&self) -> usize {
        self.row_index
    }

    // =========================================================================
    // Worksheet access - ALL story reads and writes go through here
    // =========================================================================

    /// Find all stories in worksheet order
    pub async fn find_all(store: &dyn BaseRowStore) -> AppResult<Vec<Self>> {
        let sheet = read_sheet(store, &REQUIRED_STORY_COLUMNS).await?;
        let status_column = sheet
            .column_index(columns::STATUS)
            .ok_or_else(|| AppError::MissingColumns {
                worksheet: store.worksheet().to_string(),
                missing: vec![columns::STATUS.to_string()],
                available: sheet.headers.clone(),
            })?;

        sheet
            .rows
            .iter()
            .filter(|row| !is_blank(row))
            .map(|row| Self::from_row(row, status_column, store))
            .collect()
    }

    /// Find story by identifier
    pub async fn find_by_id(id: &StoryId, store: &dyn BaseRowStore) -> AppResult<Option<Self>> {
        Ok(Self::find_all(store)
            .await?
            .into_iter()
            .find(|story| &story.id == id))
    }

    /// Append a new story with Pending status
    pub async fn create(new: NewStory, store: &dyn BaseRowStore) -> AppResult<Self> {
        let created_at = Utc::now();
        let status = AggregateStatus::Pending;

        let cells = vec![
            new.id.to_string(),
            new.title.clone(),
            new.project.clone(),
            new.document_link.clone(),
            status.label().to_string(),
            created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            new.owner.clone().unwrap_or_default(),
        ];
        store.append_row(cells).await?;

        // Re-read so the returned story carries its real sheet position
        Self::find_by_id(&new.id, store).await?.ok_or_else(|| {
            AppError::BackendUnavailable(anyhow::anyhow!(
                "Story {} missing from worksheet {} after append",
                new.id,
                store.worksheet()
            ))
        })
    }

    /// Overwrite the cached status cell
    pub async fn write_cached_status(
        &mut self,
        status: AggregateStatus,
        store: &dyn BaseRowStore,
    ) -> AppResult<()> {
        store
            .update_cell(self.row_index, self.status_column, status.label().to_string())
            .await?;
        self.cached_status = Some(status);
        Ok(())
    }
}
