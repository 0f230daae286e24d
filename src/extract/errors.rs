use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to read input file [{path}]: {source}")]
    FileAccess {
        path: String,
        #[source]
        source: io::Error
    },
    #[error("Input file [{path}] is not valid delimited text: {source}")]
    Parse {
        path: String,
        #[source]
        source: csv::Error
    }
}
