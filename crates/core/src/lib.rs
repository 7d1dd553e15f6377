//! Core types for the cstore sales dashboard
//!
//! This crate provides foundational types used across all other crates:
//! - Transaction records and monthly store targets
//! - The fixed branch enumeration with alias matching
//! - Language detection (Arabic script / Franco-Arabic / English)
//! - Metrics aggregation into the dashboard context
//! - Error types

pub mod error;
pub mod language;
pub mod metrics;
pub mod record;
pub mod store;

pub use error::{Error, Result};
pub use language::{LanguageFlags, ResponseLanguage};
pub use metrics::{aggregate, DailyPoint, DashboardContext, StorePerformance};
pub use record::{StoreTarget, TransactionRecord};
pub use store::Store;
