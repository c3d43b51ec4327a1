pub mod executor;
pub mod phrase;
pub mod rows;

pub use executor::QueryExecutor;
