use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sea_orm::FromQueryResult;

/// One point of the daily sales series.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DailySales {
    pub invoice_date: NaiveDateTime,
    pub daily_sales: Decimal
}

/// Total sales attributed to one country.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CountrySales {
    pub country_name: String,
    pub total_sales: Decimal
}
