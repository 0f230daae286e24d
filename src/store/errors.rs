use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not connect to the store: {0}")]
    Connection(#[source] DbErr),
    #[error("Insert rejected by table [{table}]: {source}")]
    Constraint {
        table: String,
        #[source]
        source: DbErr
    },
    #[error("Query against table [{table}] failed: {source}")]
    Query {
        table: String,
        #[source]
        source: DbErr
    }
}
