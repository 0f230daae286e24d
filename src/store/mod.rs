mod aggregates;
mod errors;
mod sales_store;

pub use aggregates::{CountrySales, DailySales};
pub use errors::StoreError;
pub use sales_store::Store;
