use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Required column [{column}] was not found in the input header")]
    ColumnNotFound {
        column: &'static str
    }
}
