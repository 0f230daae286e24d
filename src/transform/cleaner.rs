use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{RawTable, RawTransaction, SaleRecord};
use crate::transform::TransformError;

/// Source columns the transformation cannot proceed without.
const REQUIRED_COLUMNS: [&str; 6] = ["InvoiceNo", "InvoiceDate", "CustomerID", "Quantity", "UnitPrice", "Country"];

/// Timestamp layouts accepted for the invoice date, tried in order.
const DATE_FORMATS: [&str; 3] = ["%m/%d/%Y %H:%M", "%m/%d/%Y %H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Cleans a raw table into the fixed five-column sales shape.
///
/// Rows missing any of invoice number, customer id, invoice date, quantity,
/// or unit price are dropped, as are rows whose quantity or unit price is
/// not strictly positive (data-entry errors and returns encoded as negative
/// quantities). Surviving rows gain a derived `total_cost` and lose every
/// other source column.
///
/// # Errors
/// Returns `TransformError::ColumnNotFound` when the header lacks one of the
/// required source columns; this is checked before any row is processed.
pub fn clean(table: &RawTable) -> Result<Vec<SaleRecord>, TransformError> {
    check_schema(table)?;

    let headers = table.headers();
    let mut sales = Vec::with_capacity(table.len());
    let mut dropped = 0usize;

    for record in table.rows() {
        let raw: RawTransaction = match record.deserialize(Some(headers)) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("Skipping undeserializable row: {error}");
                dropped += 1;
                continue;
            }
        };

        match to_sale(raw) {
            Some(sale) => sales.push(sale),
            None => dropped += 1
        }
    }

    debug!("Dropped [{dropped}] of [{}] rows during cleaning", table.len());

    Ok(sales)
}

fn check_schema(table: &RawTable) -> Result<(), TransformError> {
    for column in REQUIRED_COLUMNS {
        if !table.has_column(column) {
            return Err(TransformError::ColumnNotFound { column });
        }
    }

    Ok(())
}

/// Applies the completeness and positivity filters to one row and derives
/// its total cost. Returns `None` when the row should be dropped.
fn to_sale(raw: RawTransaction) -> Option<SaleRecord> {
    let invoice_no = raw.invoice_no?;
    let customer_id = raw.customer_id?;
    let invoice_date = raw.invoice_date.as_deref().and_then(parse_invoice_date)?;
    let quantity = raw.quantity?;
    let unit_price = raw.unit_price?;

    if quantity <= Decimal::ZERO || unit_price <= Decimal::ZERO {
        return None;
    }

    let total_cost = quantity.checked_mul(unit_price)?;

    Some(SaleRecord {
        invoice_no,
        invoice_date,
        customer_id,
        total_cost,
        country_name: raw.country.unwrap_or_default()
    })
}

/// Parses an invoice timestamp, returning `None` rather than failing so that
/// unparseable dates fall through to the completeness filter.
fn parse_invoice_date(value: &str) -> Option<NaiveDateTime> {
    DATE_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}
