use std::path::PathBuf;

use tracing::{info, warn};

use crate::report::{ReportError, charts};
use crate::store::Store;

/// Runs the fixed aggregate queries and renders their charts.
///
/// Terminal, presentation-only stage: nothing downstream consumes its
/// output. Each variant returns the rendered chart path, or `None` when the
/// table held nothing to chart.
pub struct Reporter {
    store: Store,
    chart_directory: PathBuf
}

impl Reporter {
    pub fn new(store: Store, chart_directory: impl Into<PathBuf>) -> Self {
        Self {
            store,
            chart_directory: chart_directory.into()
        }
    }

    /// Line chart of total cost summed per invoice timestamp.
    pub async fn daily_sales(&self) -> Result<Option<PathBuf>, ReportError> {
        let rows = self.store.daily_sales().await?;

        if rows.is_empty() {
            warn!("Table [{}] produced no daily sales to chart", self.store.table());
            return Ok(None);
        }

        let output = self.chart_directory.join("daily_sales.svg");
        charts::render_daily_sales(&rows, &output)?;
        info!("Rendered daily sales chart to [{}]", output.display());

        Ok(Some(output))
    }

    /// Bar chart of total cost summed per country, highest first.
    pub async fn sales_by_country(&self) -> Result<Option<PathBuf>, ReportError> {
        let rows = self.store.sales_by_country().await?;

        if rows.is_empty() {
            warn!("Table [{}] produced no per-country sales to chart", self.store.table());
            return Ok(None);
        }

        let output = self.chart_directory.join("sales_by_country.svg");
        charts::render_sales_by_country(&rows, &output)?;
        info!("Rendered sales by country chart to [{}]", output.display());

        Ok(Some(output))
    }
}
