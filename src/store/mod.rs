//! Price store subsystem.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → PriceStore::lookup(product_id)
//!     → mysql.rs (scoped connection, one parameterized SELECT)
//!     → LookupResult (Found with a price, or NotFound)
//! ```
//!
//! # Design Decisions
//! - `PriceStore` is a trait so the HTTP layer holds `Arc<dyn PriceStore>`
//!   and tests substitute an in-memory store
//! - Absence is a domain outcome (`NotFound`), never an error; a row with
//!   a NULL price also maps to `NotFound` — a zero price is never invented
//! - Connection failures and query failures are distinct error variants so
//!   the HTTP boundary can log them apart

pub mod memory;
pub mod mysql;

pub use memory::{InjectedFailure, MemoryPriceStore};
pub use mysql::MySqlPriceStore;

use serde::Serialize;

/// A product and its price.
///
/// Built per-request from a successful lookup and discarded once the
/// response is serialized; this service never persists it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductPrice {
    pub product_id: u64,
    pub price: f64,
}

/// Outcome of a price query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupResult {
    /// A row with a non-null price exists for the product.
    Found(ProductPrice),
    /// No row for the product, or its price column is NULL.
    NotFound,
}

/// Error type for store operations. Both variants surface as 500s at the
/// HTTP boundary; neither is retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("error connecting to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("error querying product price: {0}")]
    Query(#[source] sqlx::Error),
}

/// Read access to the `product_price` relation.
#[async_trait::async_trait]
pub trait PriceStore: Send + Sync {
    /// Look up the price for a product.
    ///
    /// At most one logical query per call, no automatic retry, and any
    /// connection opened for the call is released on every exit path.
    async fn lookup(&self, product_id: u64) -> Result<LookupResult, StoreError>;
}
