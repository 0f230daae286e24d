use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDateTime;
use csv::StringRecord;
use rust_decimal::Decimal;

use super::{TransformError, clean};
use crate::models::{RawTable, SaleRecord};

const SOURCE_HEADERS: [&str; 8] = ["InvoiceNo", "StockCode", "Description", "Quantity", "InvoiceDate", "UnitPrice", "CustomerID", "Country"];

fn table(rows: &[[&str; 8]]) -> RawTable {
    RawTable::new(
        StringRecord::from(SOURCE_HEADERS.to_vec()),
        rows.iter().map(|row| StringRecord::from(row.to_vec())).collect()
    )
}

fn uk_row<'a>(invoice_no: &'a str, quantity: &'a str, date: &'a str, price: &'a str, customer: &'a str) -> [&'a str; 8] {
    [invoice_no, "85123A", "WHITE HANGING HEART T-LIGHT HOLDER", quantity, date, price, customer, "United Kingdom"]
}

fn timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")?)
}

#[test]
fn test_valid_row_maps_to_target_schema() -> Result<()> {
    let sales = clean(&table(&[uk_row("536365", "6", "12/1/2010 8:26", "2.55", "17850")]))?;

    let expected = SaleRecord {
        invoice_no: "536365".to_string(),
        invoice_date: timestamp("2010-12-01 08:26:00")?,
        customer_id: "17850".to_string(),
        total_cost: Decimal::from_str("15.30")?,
        country_name: "United Kingdom".to_string()
    };

    assert_eq!(sales, vec![expected]);

    Ok(())
}

#[test]
fn test_negative_quantity_row_is_dropped() -> Result<()> {
    let sales = clean(&table(&[uk_row("C536379", "-3", "12/1/2010 9:41", "27.50", "14527")]))?;

    assert!(sales.is_empty());

    Ok(())
}

#[test]
fn test_blank_customer_id_row_is_dropped() -> Result<()> {
    let sales = clean(&table(&[uk_row("536366", "6", "12/1/2010 8:28", "1.85", "")]))?;

    assert!(sales.is_empty());

    Ok(())
}

#[test]
fn test_zero_unit_price_row_is_dropped() -> Result<()> {
    let sales = clean(&table(&[uk_row("536367", "32", "12/1/2010 8:34", "0", "13047")]))?;

    assert!(sales.is_empty());

    Ok(())
}

#[test]
fn test_unparseable_invoice_date_row_is_dropped() -> Result<()> {
    let sales = clean(&table(&[uk_row("536368", "6", "first of December", "4.25", "13047")]))?;

    assert!(sales.is_empty());

    Ok(())
}

#[test]
fn test_invoice_date_with_seconds_is_accepted() -> Result<()> {
    let sales = clean(&table(&[uk_row("536369", "3", "12/1/2010 8:35:42", "5.95", "13047")]))?;

    assert_eq!(sales.len(), 1);
    assert_eq!(sales[0].invoice_date, timestamp("2010-12-01 08:35:42")?);

    Ok(())
}

#[test]
fn test_output_shape_is_independent_of_column_order_and_extras() -> Result<()> {
    let headers = ["Country", "CustomerID", "UnitPrice", "InvoiceDate", "Quantity", "Description", "StockCode", "InvoiceNo", "Extra"];
    let row = ["United Kingdom", "17850", "2.55", "12/1/2010 8:26", "6", "WHITE HANGING HEART T-LIGHT HOLDER", "85123A", "536365", "ignored"];

    let shuffled = RawTable::new(
        StringRecord::from(headers.to_vec()),
        vec![StringRecord::from(row.to_vec())]
    );

    let sales = clean(&shuffled)?;
    let reference = clean(&table(&[uk_row("536365", "6", "12/1/2010 8:26", "2.55", "17850")]))?;

    assert_eq!(sales, reference);

    Ok(())
}

#[test]
fn test_missing_required_column_fails_before_row_processing() {
    let headers = ["InvoiceNo", "StockCode", "Description", "Quantity", "InvoiceDate", "UnitPrice", "Country"];
    let row = ["536365", "85123A", "WHITE HANGING HEART T-LIGHT HOLDER", "6", "12/1/2010 8:26", "2.55", "United Kingdom"];

    let headless = RawTable::new(
        StringRecord::from(headers.to_vec()),
        vec![StringRecord::from(row.to_vec())]
    );

    let result = clean(&headless);

    assert!(matches!(result, Err(TransformError::ColumnNotFound { column: "CustomerID" })));
}

#[test]
fn test_row_count_never_grows_and_survivors_have_positive_totals() -> Result<()> {
    let input = table(&[
        uk_row("536365", "6", "12/1/2010 8:26", "2.55", "17850"),
        uk_row("C536379", "-1", "12/1/2010 9:41", "27.50", "14527"),
        uk_row("536366", "6", "12/1/2010 8:28", "1.85", ""),
        uk_row("536367", "32", "12/1/2010 8:34", "0", "13047"),
        uk_row("536368", "6", "not a date", "4.25", "13047"),
        uk_row("536370", "24", "12/1/2010 8:45", "3.75", "12583")
    ]);

    let sales = clean(&input)?;

    assert!(sales.len() <= input.len());
    assert_eq!(sales.len(), 2);
    assert!(sales.iter().all(|sale| sale.total_cost > Decimal::ZERO));

    Ok(())
}

#[test]
fn test_second_pass_over_own_output_drops_nothing() -> Result<()> {
    let first = clean(&table(&[
        uk_row("536365", "6", "12/1/2010 8:26", "2.55", "17850"),
        uk_row("C536379", "-1", "12/1/2010 9:41", "27.50", "14527"),
        uk_row("536370", "24", "12/1/2010 8:45", "3.75", "12583")
    ]))?;

    let rows = first
        .iter()
        .map(|sale| {
            StringRecord::from(vec![
                sale.invoice_no.clone(),
                String::new(),
                String::new(),
                "1".to_string(),
                sale.invoice_date.format("%Y-%m-%d %H:%M:%S").to_string(),
                sale.total_cost.to_string(),
                sale.customer_id.clone(),
                sale.country_name.clone()
            ])
        })
        .collect();

    let again = clean(&RawTable::new(StringRecord::from(SOURCE_HEADERS.to_vec()), rows))?;

    assert_eq!(again, first);

    Ok(())
}
