pub mod bank;
pub mod client;
pub mod document;
pub mod errors;
pub mod extract;
pub mod rate;
pub mod utils;

// Re-export
pub use bank::{BankSource, BankTrait, ColumnMap, SourceDescriptor};
pub use client::{DEFAULT_FETCH_TIMEOUT, create_http_client};
pub use document::{RateDocument, TableRow, parse_locator};
pub use errors::RateScraperError;
pub use extract::extract_records;
pub use rate::{CurrencyRecord, RateSnapshot};
pub use utils::{NumberFormat, parse_rate};
