use std::future::Future;

use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::warn;

use crate::models::SaleRecord;
use crate::store::{CountrySales, DailySales, StoreError};

const TARGET_COLUMNS: &str = "invoice_no, invoice_date, customer_id, total_cost, country_name";

/// Scoped access to the relational sales table.
///
/// Every operation opens a connection, runs, and closes the connection on
/// every exit path; nothing holds a connection across pipeline stages. The
/// target table must already exist with compatible columns.
#[derive(Debug, Clone)]
pub struct Store {
    url: String,
    table: String
}

impl Store {
    pub fn new(url: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            table: table.into()
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Appends each sale as one insert and returns the inserted row count.
    /// No upsert or dedup: repeated runs over the same file duplicate rows.
    pub async fn append_sales(&self, sales: &[SaleRecord]) -> Result<u64, StoreError> {
        let statements: Vec<Statement> = sales.iter().map(|sale| insert_sale(&self.table, sale)).collect();
        let table = self.table.clone();

        self.with_connection(|connection| async move {
            let mut inserted = 0u64;

            for statement in statements {
                let result = connection.execute(statement).await.map_err(|source| StoreError::Constraint {
                    table: table.clone(),
                    source
                })?;

                inserted += result.rows_affected();
            }

            Ok(inserted)
        })
        .await
    }

    /// Sum of total cost per invoice timestamp, ascending.
    pub async fn daily_sales(&self) -> Result<Vec<DailySales>, StoreError> {
        self.query_all(daily_sales_query(&self.table)).await
    }

    /// Sum of total cost per country, highest first.
    pub async fn sales_by_country(&self) -> Result<Vec<CountrySales>, StoreError> {
        self.query_all(sales_by_country_query(&self.table)).await
    }

    /// Reads back the first few loaded rows, a cheap check that a load
    /// actually landed.
    pub async fn sample(&self, limit: u64) -> Result<Vec<SaleRecord>, StoreError> {
        self.query_all(sample_query(&self.table, limit)).await
    }

    async fn query_all<T: FromQueryResult>(&self, statement: Statement) -> Result<Vec<T>, StoreError> {
        let table = self.table.clone();

        self.with_connection(|connection| async move {
            T::find_by_statement(statement)
                .all(&connection)
                .await
                .map_err(|source| StoreError::Query { table, source })
        })
        .await
    }

    /// The one place a connection is acquired and released: connect, run the
    /// operation, close on every exit path.
    async fn with_connection<T, F, Fut>(&self, operation: F) -> Result<T, StoreError>
    where
        F: FnOnce(DatabaseConnection) -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let connection = Database::connect(self.url.as_str()).await.map_err(StoreError::Connection)?;
        let result = operation(connection.clone()).await;

        if let Err(error) = connection.close().await {
            warn!("Store connection did not close cleanly: {error}");
        }

        result
    }
}

pub(crate) fn insert_sale(table: &str, sale: &SaleRecord) -> Statement {
    Statement::from_sql_and_values(
        DbBackend::Postgres,
        format!("INSERT INTO {table} ({TARGET_COLUMNS}) VALUES ($1, $2, $3, $4, $5)"),
        [
            sale.invoice_no.clone().into(),
            sale.invoice_date.into(),
            sale.customer_id.clone().into(),
            sale.total_cost.into(),
            sale.country_name.clone().into()
        ]
    )
}

pub(crate) fn daily_sales_query(table: &str) -> Statement {
    Statement::from_string(
        DbBackend::Postgres,
        format!("SELECT invoice_date, SUM(total_cost) AS daily_sales FROM {table} GROUP BY invoice_date ORDER BY invoice_date")
    )
}

pub(crate) fn sales_by_country_query(table: &str) -> Statement {
    Statement::from_string(
        DbBackend::Postgres,
        format!("SELECT country_name, SUM(total_cost) AS total_sales FROM {table} GROUP BY country_name ORDER BY total_sales DESC")
    )
}

pub(crate) fn sample_query(table: &str, limit: u64) -> Statement {
    Statement::from_string(DbBackend::Postgres, format!("SELECT {TARGET_COLUMNS} FROM {table} LIMIT {limit}"))
}
