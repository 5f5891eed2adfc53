pub mod adapters;
pub mod core;
pub mod csv_batch;
pub mod error;
pub mod observability;
pub mod utils;
