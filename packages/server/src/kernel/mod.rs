//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod memory_row_store;
pub mod postgres_row_store;
pub mod test_dependencies;
pub mod traits;

pub use deps::ServerDeps;
pub use memory_row_store::MemoryRowStore;
pub use postgres_row_store::PostgresRowStore;
pub use test_dependencies::{FailingRowStore, ReadOnlyCellsRowStore, TestDependencies};
pub use traits::*;
