// HTTP server setup (Axum + server-rendered forms)
pub mod app;
pub mod error;
pub mod forms;
pub mod routes;
pub mod views;

pub use app::*;
