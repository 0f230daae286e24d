use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// An extracted table: the source header row plus one record per input line.
///
/// Columns come out exactly as the header row names them; no type coercion
/// happens at this stage.
#[derive(Debug, Clone)]
pub struct RawTable {
    headers: StringRecord,
    rows: Vec<StringRecord>
}

impl RawTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header == name)
    }
}

/// The lenient typed view of one raw row.
///
/// Every field is optional: an empty, missing, or unparseable cell becomes
/// `None` instead of failing the row. The completeness filter downstream
/// decides which absences are fatal.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    #[serde(rename = "InvoiceNo", default)]
    pub invoice_no: Option<String>,
    #[serde(rename = "InvoiceDate", default)]
    pub invoice_date: Option<String>,
    #[serde(rename = "CustomerID", default)]
    pub customer_id: Option<String>,
    #[serde(rename = "Quantity", deserialize_with = "lenient_decimal", default)]
    pub quantity: Option<Decimal>,
    #[serde(rename = "UnitPrice", deserialize_with = "lenient_decimal", default)]
    pub unit_price: Option<Decimal>,
    #[serde(rename = "Country", default)]
    pub country: Option<String>
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    Ok(value
        .as_deref()
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .and_then(|cell| Decimal::from_str(cell).ok()))
}
