//! Transaction records and monthly targets
//!
//! Records arrive already normalized from the ingestion layer (one row per
//! store per day); this crate never parses raw spreadsheet cells.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::store::Store;

/// One day of orders/sales for one store
///
/// Immutable once ingested. `store_name` is normally one of the four branch
/// names; unrecognized names still count toward totals but are excluded
/// from per-store aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar day, ISO `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    pub store_name: String,
    pub orders: u32,
    /// Sales in EGP
    pub sales: f64,
}

impl TransactionRecord {
    pub fn new(date: NaiveDate, store: Store, orders: u32, sales: f64) -> Self {
        Self {
            date,
            store_name: store.name().to_string(),
            orders,
            sales,
        }
    }

    /// The branch this record belongs to, if its name is recognized
    pub fn store(&self) -> Option<Store> {
        Store::from_name(&self.store_name)
    }
}

/// Monthly sales target for one store
///
/// One row per store per month, owned by the persistence layer. When a
/// store has no row, [`Store::default_target`] applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreTarget {
    pub store_name: String,
    pub month: u32,
    pub year: i32,
    /// Target in EGP
    pub target: f64,
}
