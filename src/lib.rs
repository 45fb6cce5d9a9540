//! Product Price Service Library

pub mod config;
pub mod http;
pub mod observability;
pub mod store;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use store::{LookupResult, PriceStore, ProductPrice};
