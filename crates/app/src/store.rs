//! In-memory store
//!
//! Every table lives behind one [`RwLock`]. Reads (listing, reporting, invoice
//! lookups) share the lock; anything that mutates a table takes it exclusively,
//! so a checkout that decrements stock and appends a sale is a single atomic step.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::{
    carts::records::{CartRecord, CartUuid},
    inventory::records::InventoryItemRecord,
    sales::records::SaleRecord,
};

/// Lookup and uniqueness failures raised by repositories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No row matched the requested id.
    #[error("row not found")]
    NotFound,

    /// A row with the same unique key already exists.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(&'static str),
}

/// The tables held by the store.
#[derive(Debug, Default)]
pub struct Tables {
    /// Inventory items in insertion order.
    pub inventory: Vec<InventoryItemRecord>,

    /// Completed sales in insertion order. Not assumed to be sorted by time.
    pub sales: Vec<SaleRecord>,

    /// Open carts.
    pub carts: FxHashMap<CartUuid, CartRecord>,
}

/// Shared handle to the in-memory tables.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create a store holding the given tables.
    #[must_use]
    pub fn new(tables: Tables) -> Self {
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Acquire shared read access.
    pub async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    /// Acquire exclusive write access.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }
}
