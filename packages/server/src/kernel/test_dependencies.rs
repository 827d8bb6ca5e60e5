// TestDependencies - row store doubles for testing
//
// Provides in-memory worksheets (plus always-failing and write-protected
// ones) that can be injected into ServerDeps for tests.

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::sync::Arc;

use super::{BaseRowStore, MemoryRowStore, ServerDeps, Sheet};
use crate::domains::stories::{STORY_COLUMNS, VOTE_COLUMNS};

// =============================================================================
// Failing Row Store
// =============================================================================

/// Row store whose every call fails, as when the backing service is down
pub struct FailingRowStore {
    worksheet: String,
}

impl FailingRowStore {
    pub fn new(worksheet: impl Into<String>) -> Self {
        Self {
            worksheet: worksheet.into(),
        }
    }
}

#[async_trait]
impl BaseRowStore for FailingRowStore {
    fn worksheet(&self) -> &str {
        &self.worksheet
    }

    async fn list_rows(&self) -> Result<Sheet> {
        bail!("Worksheet {} unreachable", self.worksheet)
    }

    async fn append_row(&self, _values: Vec<String>) -> Result<()> {
        bail!("Worksheet {} unreachable", self.worksheet)
    }

    async fn update_cell(&self, _row_index: usize, _column_index: usize, _value: String) -> Result<()> {
        bail!("Worksheet {} unreachable", self.worksheet)
    }
}

/// Row store that reads and appends through an in-memory worksheet but
/// rejects every cell update, as when a sheet is write-protected
pub struct ReadOnlyCellsRowStore {
    inner: Arc<MemoryRowStore>,
}

impl ReadOnlyCellsRowStore {
    pub fn new(inner: Arc<MemoryRowStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl BaseRowStore for ReadOnlyCellsRowStore {
    fn worksheet(&self) -> &str {
        self.inner.worksheet()
    }

    async fn list_rows(&self) -> Result<Sheet> {
        self.inner.list_rows().await
    }

    async fn append_row(&self, values: Vec<String>) -> Result<()> {
        self.inner.append_row(values).await
    }

    async fn update_cell(&self, row_index: usize, _column_index: usize, _value: String) -> Result<()> {
        bail!("Row {} of worksheet {} is protected", row_index, self.inner.worksheet())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub stories: Arc<MemoryRowStore>,
    pub votes: Arc<MemoryRowStore>,
    stories_unavailable: bool,
    votes_unavailable: bool,
    story_cells_read_only: bool,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            stories: Arc::new(MemoryRowStore::new("stories", &STORY_COLUMNS)),
            votes: Arc::new(MemoryRowStore::new("votes", &VOTE_COLUMNS)),
            stories_unavailable: false,
            votes_unavailable: false,
            story_cells_read_only: false,
        }
    }

    /// Set the story worksheet
    pub fn mock_stories(mut self, store: MemoryRowStore) -> Self {
        self.stories = Arc::new(store);
        self
    }

    /// Set the vote worksheet
    pub fn mock_votes(mut self, store: MemoryRowStore) -> Self {
        self.votes = Arc::new(store);
        self
    }

    /// Make every story worksheet call fail
    pub fn stories_unavailable(mut self) -> Self {
        self.stories_unavailable = true;
        self
    }

    /// Make every vote worksheet call fail
    pub fn votes_unavailable(mut self) -> Self {
        self.votes_unavailable = true;
        self
    }

    /// Make cell updates on the story worksheet fail (reads and appends still work)
    pub fn story_cells_read_only(mut self) -> Self {
        self.story_cells_read_only = true;
        self
    }

    /// Build ServerDeps backed by these doubles
    pub fn into_server_deps(&self) -> ServerDeps {
        let stories: Arc<dyn BaseRowStore> = if self.stories_unavailable {
            Arc::new(FailingRowStore::new(self.stories.worksheet()))
        } else if self.story_cells_read_only {
            Arc::new(ReadOnlyCellsRowStore::new(self.stories.clone()))
        } else {
            self.stories.clone()
        };
        let votes: Arc<dyn BaseRowStore> = if self.votes_unavailable {
            Arc::new(FailingRowStore::new(self.votes.worksheet()))
        } else {
            self.votes.clone()
        };
        ServerDeps::new(stories, votes)
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
