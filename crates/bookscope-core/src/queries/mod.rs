pub mod catalog;
pub mod reviews;
pub mod stats;

pub use catalog::{PriceBand, PricePartition};
