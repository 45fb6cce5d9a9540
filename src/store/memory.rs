//! In-memory price store.
//!
//! Test double and database-free stand-in. Seeded with a fixed
//! `product_id -> price` map where a `None` price models a row whose
//! price column is NULL. Counts logical connection opens and releases so
//! tests can assert the scoped-resource contract of `lookup`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::store::{LookupResult, PriceStore, ProductPrice, StoreError};

/// Failure to inject on the next lookups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InjectedFailure {
    /// The store cannot be reached; no connection is opened.
    Connection,
    /// The connection opens but the statement fails.
    Query,
}

/// Seeded in-memory implementation of [`PriceStore`].
#[derive(Default)]
pub struct MemoryPriceStore {
    prices: HashMap<u64, Option<f64>>,
    failure: Mutex<Option<InjectedFailure>>,
    opened: AtomicUsize,
    released: AtomicUsize,
}

impl MemoryPriceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a product with a price. A `None` price models a NULL column.
    pub fn with_price(mut self, product_id: u64, price: Option<f64>) -> Self {
        self.prices.insert(product_id, price);
        self
    }

    /// Make subsequent lookups fail with the given failure mode.
    pub fn inject_failure(&self, failure: Option<InjectedFailure>) {
        *self.failure.lock().unwrap() = failure;
    }

    /// Logical connections opened so far.
    pub fn connections_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Logical connections released so far.
    pub fn connections_released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    fn synthetic_error(kind: InjectedFailure) -> StoreError {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "injected failure");
        match kind {
            InjectedFailure::Connection => StoreError::Connection(sqlx::Error::Io(io)),
            InjectedFailure::Query => StoreError::Query(sqlx::Error::Io(io)),
        }
    }
}

#[async_trait::async_trait]
impl PriceStore for MemoryPriceStore {
    async fn lookup(&self, product_id: u64) -> Result<LookupResult, StoreError> {
        let failure = *self.failure.lock().unwrap();
        if failure == Some(InjectedFailure::Connection) {
            return Err(Self::synthetic_error(InjectedFailure::Connection));
        }

        self.opened.fetch_add(1, Ordering::SeqCst);
        let result = if failure == Some(InjectedFailure::Query) {
            Err(Self::synthetic_error(InjectedFailure::Query))
        } else {
            match self.prices.get(&product_id) {
                Some(Some(price)) => Ok(LookupResult::Found(ProductPrice {
                    product_id,
                    price: *price,
                })),
                Some(None) | None => Ok(LookupResult::NotFound),
            }
        };
        self.released.fetch_add(1, Ordering::SeqCst);

        result
    }
}
