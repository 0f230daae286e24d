use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Chart rendering failed: {0}")]
    Render(String)
}
