//! Shared application state
//!
//! In-memory snapshot of the current record set and targets. Aggregation
//! runs on read, so every chat query and metrics fetch sees a fresh,
//! immutable context. Writes replace wholesale; records are never edited
//! in place.

use std::sync::Arc;

use parking_lot::RwLock;

use dashboard_agent::QueryEngine;
use dashboard_core::{aggregate, DashboardContext, StoreTarget, TransactionRecord};

#[derive(Default)]
struct DashboardData {
    records: Vec<TransactionRecord>,
    targets: Vec<StoreTarget>,
}

/// State shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    data: Arc<RwLock<DashboardData>>,
    pub engine: Arc<QueryEngine>,
    pub cors_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(engine: QueryEngine, cors_origins: Vec<String>) -> Self {
        Self {
            data: Arc::new(RwLock::new(DashboardData::default())),
            engine: Arc::new(engine),
            cors_origins: Arc::new(cors_origins),
        }
    }

    /// Fresh aggregated snapshot of the current data
    pub fn context(&self) -> DashboardContext {
        let data = self.data.read();
        aggregate(&data.records, &data.targets)
    }

    /// Bulk replace of the record set (the ingestion boundary)
    pub fn replace_records(&self, records: Vec<TransactionRecord>) -> usize {
        let count = records.len();
        self.data.write().records = records;
        tracing::info!(count, "records replaced");
        count
    }

    /// Replace the explicit monthly targets
    pub fn replace_targets(&self, targets: Vec<StoreTarget>) -> usize {
        let count = targets.len();
        self.data.write().targets = targets;
        tracing::info!(count, "targets replaced");
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dashboard_core::Store;

    #[test]
    fn test_context_reflects_replacement() {
        let state = AppState::new(QueryEngine::deterministic(), Vec::new());
        assert_eq!(state.context().total_orders, 0);

        state.replace_records(vec![TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Store::Tagmo,
            12,
            9_000.0,
        )]);
        let ctx = state.context();
        assert_eq!(ctx.total_orders, 12);
        assert_eq!(ctx.total_sales, 9_000.0);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let state = AppState::new(QueryEngine::deterministic(), Vec::new());
        let before = state.context();
        state.replace_records(vec![TransactionRecord::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Store::Maadi,
            1,
            100.0,
        )]);
        // An already captured snapshot must not change
        assert_eq!(before.total_orders, 0);
        assert_eq!(state.context().total_orders, 1);
    }
}
