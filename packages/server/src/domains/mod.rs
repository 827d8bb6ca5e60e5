// Business domains
pub mod stories;
pub mod tally;
