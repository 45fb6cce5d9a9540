//! MySQL-backed price store.
//!
//! # Responsibilities
//! - Open a scoped connection per lookup using the validated config
//! - Execute the single parameterized price query
//! - Release the connection on every exit path
//!
//! # Design Decisions
//! - One connection per lookup, no pool: the baseline contract is at most
//!   one logical query per call with guaranteed release
//! - The product id is bound as a query parameter, never interpolated
//!   into the statement text
//! - `LIMIT 1` encodes the invariant that `product_price` holds one row
//!   per product id

use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseConfig;
use crate::store::{LookupResult, PriceStore, ProductPrice, StoreError};

const PRICE_QUERY: &str = "SELECT price FROM product_price WHERE product_id = ? LIMIT 1";

/// Price store reading from the `product_price` table.
pub struct MySqlPriceStore {
    config: DatabaseConfig,
}

impl MySqlPriceStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.config.address)
            .port(self.config.port)
            .database(&self.config.database)
            .username(&self.config.user)
            .password(&self.config.password)
    }

    /// Run the price query on an open connection.
    ///
    /// The scalar is doubly optional: the outer level is row presence,
    /// the inner level is the nullable price column.
    async fn query_price(
        conn: &mut MySqlConnection,
        product_id: u64,
    ) -> Result<Option<Option<f64>>, StoreError> {
        sqlx::query_scalar(PRICE_QUERY)
            .bind(product_id)
            .fetch_optional(conn)
            .await
            .map_err(StoreError::Query)
    }
}

#[async_trait::async_trait]
impl PriceStore for MySqlPriceStore {
    async fn lookup(&self, product_id: u64) -> Result<LookupResult, StoreError> {
        let mut conn = self
            .connect_options()
            .connect()
            .await
            .map_err(StoreError::Connection)?;

        // Close before inspecting the result so the connection is
        // released on the query-error path too.
        let row = Self::query_price(&mut conn, product_id).await;
        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "Error closing database connection");
        }

        match row? {
            Some(Some(price)) => Ok(LookupResult::Found(ProductPrice { product_id, price })),
            Some(None) | None => Ok(LookupResult::NotFound),
        }
    }
}
