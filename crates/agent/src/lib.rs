//! Multilingual analytics query engine
//!
//! Answers free-text questions about the dashboard snapshot in Arabic
//! script, Franco-Arabic or English. Resolution is an ordered rule chain
//! with fall-through; the final rule always answers, so the public entry
//! point never fails and never returns an empty string.
//!
//! Features:
//! - Ordered intent rule table (first match wins)
//! - Date / day-number / day-range extraction for temporal filtering
//! - Per-language response templates keyed by (intent, language)
//! - Hosted-model-first orchestration with deterministic fallback

pub mod engine;
pub mod intent;
pub mod templates;
pub mod temporal;

pub use engine::QueryEngine;
pub use intent::{resolve, Rule, RULES};
pub use templates::{render, Answer};
pub use temporal::{ExplicitDate, TemporalQuery};
