//! Vote tally - derives a story's aggregate status from its recorded decisions.
//!
//! The resolver is a pure function over the full vote set. Callers persist
//! the result; nothing here touches a worksheet.

pub mod decision;
pub mod resolver;

pub use decision::{AggregateStatus, Decision};
pub use resolver::{resolve, Tally};
