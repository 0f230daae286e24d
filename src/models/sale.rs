use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;

/// One cleaned sales row in the target schema.
///
/// This is the fixed five-column shape every downstream stage consumes:
/// `total_cost` is derived from quantity and unit price, the rest are
/// renamed source columns.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SaleRecord {
    pub invoice_no: String,
    pub invoice_date: NaiveDateTime,
    pub customer_id: String,
    pub total_cost: Decimal,
    pub country_name: String
}

impl SaleRecord {
    /// Column names of the target schema, in output order.
    pub const COLUMNS: [&'static str; 5] = ["invoice_no", "invoice_date", "customer_id", "total_cost", "country_name"];
}
