// HTTP routes
pub mod approval;
pub mod backoffice;
pub mod health;

pub use approval::*;
pub use backoffice::*;
pub use health::*;
