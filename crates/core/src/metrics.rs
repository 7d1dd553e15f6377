//! Metrics aggregation
//!
//! Reduces the current record set into the dashboard context: totals,
//! per-store performance against target, and the daily series the chart
//! renders. Pure functions of their input; recomputed on every refresh and
//! never mutated in place.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{StoreTarget, TransactionRecord};
use crate::store::Store;

/// One store's month-to-date performance against its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorePerformance {
    pub name: String,
    pub sales: f64,
    pub orders: u32,
    pub target: f64,
    /// Sales as a percentage of target, clamped to 0..=100
    pub progress: f64,
}

/// Daily aggregate across all stores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub sales: f64,
    pub orders: u32,
}

/// Everything the dashboard and the query engine read
///
/// A fresh snapshot per refresh of the underlying records. The raw
/// `sales_data` is retained for ad-hoc temporal filtering by the query
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardContext {
    pub total_sales: f64,
    pub total_orders: u32,
    /// 0 when there are no orders
    pub avg_order_value: f64,
    /// One entry per branch in [`Store::all`] order, zeros when no records
    pub store_performance: Vec<StorePerformance>,
    /// Per-day totals sorted by date
    pub daily_series: Vec<DailyPoint>,
    pub sales_data: Vec<TransactionRecord>,
}

impl DashboardContext {
    /// Performance entry for one branch
    pub fn performance(&self, store: Store) -> Option<&StorePerformance> {
        self.store_performance.iter().find(|p| p.name == store.name())
    }

    /// Most recent date present in the record set
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.sales_data.iter().map(|r| r.date).max()
    }
}

/// Resolve a store's target: explicit row first, fixed default otherwise
fn resolve_target(store: Store, targets: &[StoreTarget]) -> f64 {
    targets
        .iter()
        .find(|t| t.store_name == store.name())
        .map(|t| t.target)
        .unwrap_or_else(|| store.default_target())
}

/// Build the dashboard context from the current record set
///
/// Totals run over every record, including ones with unrecognized store
/// names; per-store sums only cover the four known branches. Deterministic,
/// no I/O, empty input yields an all-zero context.
pub fn aggregate(records: &[TransactionRecord], targets: &[StoreTarget]) -> DashboardContext {
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let total_orders: u32 = records.iter().map(|r| r.orders).sum();
    let avg_order_value = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    let store_performance = Store::all()
        .iter()
        .map(|&store| {
            let sales: f64 = records
                .iter()
                .filter(|r| r.store_name == store.name())
                .map(|r| r.sales)
                .sum();
            let orders: u32 = records
                .iter()
                .filter(|r| r.store_name == store.name())
                .map(|r| r.orders)
                .sum();
            let target = resolve_target(store, targets);
            let progress = if target > 0.0 {
                (sales / target * 100.0).clamp(0.0, 100.0)
            } else {
                0.0
            };

            StorePerformance {
                name: store.name().to_string(),
                sales,
                orders,
                target,
                progress,
            }
        })
        .collect();

    let mut buckets: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for record in records {
        let entry = buckets.entry(record.date).or_insert((0.0, 0));
        entry.0 += record.sales;
        entry.1 += record.orders;
    }
    let daily_series = buckets
        .into_iter()
        .map(|(date, (sales, orders))| DailyPoint { date, sales, orders })
        .collect();

    DashboardContext {
        total_sales,
        total_orders,
        avg_order_value,
        store_performance,
        daily_series,
        sales_data: records.to_vec(),
    }
}
