// HU Approval - API Core
//
// Backoffice registration and stakeholder approval of user stories ("HUs")
// stored in a row-oriented worksheet store.
//
// Aggregate status is always derived from the vote worksheet by the tally
// resolver in domains/tally.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
