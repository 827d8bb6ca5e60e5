//! Server dependencies (using traits for testability)
//!
//! Central container handed to every domain action. The row store backends
//! sit behind `BaseRowStore` so tests can swap them out.

use std::sync::Arc;

use crate::kernel::BaseRowStore;

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    /// Story worksheet (one row per HU)
    pub stories: Arc<dyn BaseRowStore>,
    /// Vote worksheet (one row per submitted decision)
    pub votes: Arc<dyn BaseRowStore>,
}

impl ServerDeps {
    pub fn new(stories: Arc<dyn BaseRowStore>, votes: Arc<dyn BaseRowStore>) -> Self {
        Self { stories, votes }
    }
}
