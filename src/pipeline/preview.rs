use std::io::{self, BufWriter, Write};

use crate::models::{RawTable, SaleRecord};

const PREVIEW_ROWS: usize = 5;

/// Writes the header and first few rows of the raw table to stdout.
pub fn print_raw_preview(table: &RawTable) -> io::Result<()> {
    let mut output = BufWriter::new(io::stdout().lock());

    writeln!(output, "Extracted data preview:")?;
    writeln!(output, "{}", join(table.headers().iter()))?;

    for record in table.rows().iter().take(PREVIEW_ROWS) {
        writeln!(output, "{}", join(record.iter()))?;
    }

    output.flush()
}

/// Writes the target-schema header and first few sales rows to stdout.
pub fn print_sales_preview(title: &str, sales: &[SaleRecord]) -> io::Result<()> {
    let mut output = BufWriter::new(io::stdout().lock());

    writeln!(output, "{title}")?;
    writeln!(output, "{}", SaleRecord::COLUMNS.join(","))?;

    for sale in sales.iter().take(PREVIEW_ROWS) {
        writeln!(
            output,
            "{},{},{},{},{}",
            sale.invoice_no,
            sale.invoice_date,
            sale.customer_id,
            sale.total_cost,
            sale.country_name
        )?;
    }

    output.flush()
}

fn join<'a>(fields: impl Iterator<Item = &'a str>) -> String {
    fields.collect::<Vec<_>>().join(",")
}
