mod config;
mod extract;
mod load;
mod models;
mod pipeline;
mod report;
mod store;
mod transform;

use std::io::stderr;
use std::process::exit;

use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{Layer, fmt};

use crate::config::PipelineConfig;
use crate::pipeline::Pipeline;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: retail-etl [input].csv [log_level:optional]");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Optional stages are enabled through the environment: RETAIL_ETL_LOAD, RETAIL_ETL_REPORT_DAILY, RETAIL_ETL_REPORT_COUNTRY, RETAIL_ETL_SAMPLE");
        exit(1);
    }

    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let config = PipelineConfig::from_env(args[1].as_str());

    if let Err(error) = Pipeline::new(config).run().await {
        error!("Pipeline failed: {error:#}");
        exit(1);
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Table previews go to stdout, so logging has to stay on stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
