use tracing::info;

use crate::models::SaleRecord;
use crate::store::{Store, StoreError};

/// Appends transformed sales to the pre-existing relational table.
pub struct Loader {
    store: Store
}

impl Loader {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns `StoreError::Connection` when the store is unreachable and
    /// `StoreError::Constraint` when the table rejects a row.
    pub async fn load(&self, sales: &[SaleRecord]) -> Result<(), StoreError> {
        if sales.is_empty() {
            info!("No rows to load into table [{}]", self.store.table());
            return Ok(());
        }

        let inserted = self.store.append_sales(sales).await?;

        info!("Loaded [{inserted}] rows into table [{}]", self.store.table());

        Ok(())
    }
}
