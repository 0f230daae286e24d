mod raw;
mod sale;

pub use raw::{RawTable, RawTransaction};
pub use sale::SaleRecord;
