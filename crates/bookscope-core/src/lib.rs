pub mod config;
pub mod error;
pub mod models;
pub mod queries;

pub use config::QueryConfig;
pub use error::{BookscopeError, Result};
pub use models::*;

pub use queries::catalog::{PriceBand, PricePartition};
