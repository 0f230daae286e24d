use std::time::Instant;

use anyhow::Result;
use tracing::info;

use crate::config::PipelineConfig;
use crate::extract;
use crate::load::Loader;
use crate::pipeline::preview;
use crate::report::Reporter;
use crate::store::Store;
use crate::transform;

/// The linear extract → transform → load → report pipeline.
///
/// Stages run to completion in order; the optional store-backed stages only
/// run when the configuration enables them.
pub struct Pipeline {
    config: PipelineConfig
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs every enabled stage in order, stopping at the first failure.
    pub async fn run(&self) -> Result<()> {
        let timer = Instant::now();

        let raw = extract::read_csv(&self.config.input_path)?;
        info!("Extracted [{}] rows from [{}]", raw.len(), self.config.input_path.display());
        preview::print_raw_preview(&raw)?;

        let sales = transform::clean(&raw)?;
        info!("Transformed [{}] of [{}] rows", sales.len(), raw.len());
        preview::print_sales_preview("Transformed data preview:", &sales)?;

        let store = Store::new(self.config.database_url.as_str(), self.config.table_name.as_str());

        if self.config.load_enabled {
            Loader::new(store.clone()).load(&sales).await?;
        }

        if self.config.report_daily_sales || self.config.report_sales_by_country {
            let reporter = Reporter::new(store.clone(), &self.config.chart_directory);

            if self.config.report_daily_sales {
                reporter.daily_sales().await?;
            }

            if self.config.report_sales_by_country {
                reporter.sales_by_country().await?;
            }
        }

        if self.config.sample_enabled {
            let rows = store.sample(5).await?;
            preview::print_sales_preview("Fetched data from the store:", &rows)?;
        }

        info!("Pipeline completed in: {:?}", timer.elapsed());

        Ok(())
    }
}
