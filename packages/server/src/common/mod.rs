// Common types and utilities shared across the application

pub mod entity_ids;
pub mod errors;

pub use entity_ids::*;
pub use errors::*;
