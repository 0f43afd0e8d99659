// Domain types and value objects
mod category;
mod error;
mod sales;

// Re-export commonly used types to the world
pub use category::CategoryTotal;
pub use error::ChartError;
pub use sales::{SalesRecord, SalesSeries};
