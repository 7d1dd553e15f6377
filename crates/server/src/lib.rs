//! HTTP surface for the cstore sales dashboard
//!
//! Boundary endpoints only: the (external) ingestion layer pushes
//! normalized records in, the (external) presentation layer reads the
//! aggregated snapshot and talks to the chat endpoint. Persistence and
//! spreadsheet parsing live elsewhere.

pub mod http;
pub mod state;

pub use http::create_router;
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Bind error: {0}")]
    Bind(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
