//! `kurs-scraper-rs`
//!
//! Scrape published exchange-rate (kurs) tables from Indonesian bank websites
//! and serve them as JSON.
//!
//! ## Quickstart (library)
//!
//! ```no_run
//! use kurs_scraper_rs::{BankTrait, Bi, DEFAULT_FETCH_TIMEOUT, create_http_client};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), kurs_scraper_rs::RateScraperError> {
//! let client = create_http_client(DEFAULT_FETCH_TIMEOUT)?;
//! let snapshot = Bi::new(client).fetch_snapshot().await?;
//! for record in snapshot.records() {
//!     println!("{} buy={:?} sell={:?}", record.currency, record.buy, record.sell);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (server)
//!
//! ```no_run
//! use kurs_scraper_rs::server::{AppState, Config, app_router};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let router = app_router(AppState::from_config(&config)?);
//! let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
//! axum::serve(listener, router).await?;
//! # Ok(())
//! # }
//! ```

pub mod banks;
pub mod common;
pub mod server;

// Re-export common types
pub use banks::{Bca, Bi, Bni, Mega, build_bank};

pub use common::{
    BankSource, BankTrait, ColumnMap, CurrencyRecord, DEFAULT_FETCH_TIMEOUT, NumberFormat,
    RateDocument, RateScraperError, RateSnapshot, SourceDescriptor, TableRow, create_http_client,
    extract_records, parse_rate,
};
