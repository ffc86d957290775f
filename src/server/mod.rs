//! HTTP surface: one JSON endpoint per bank, plus a banner and a 404 echo.

pub mod config;
pub mod error;
pub mod routes;

use crate::banks::build_bank;
use crate::common::{BankSource, BankTrait, RateScraperError, create_http_client};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export
pub use config::{Config, LogFormat};
pub use error::ApiError;
pub use routes::{app_router, escape_html};

/// Read-only state shared by every request. Snapshots are never stored here.
pub struct AppState {
    banks: Vec<Box<dyn BankTrait>>,
    request_timeout: Duration,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Arc<Self>, RateScraperError> {
        let client = create_http_client(config.fetch_timeout)?;
        let banks = BankSource::ALL
            .into_iter()
            .map(|source| {
                build_bank(
                    source,
                    client.clone(),
                    config.source_urls.get(&source).cloned(),
                )
            })
            .collect();
        Ok(Arc::new(Self {
            banks,
            request_timeout: config.request_timeout,
        }))
    }

    pub fn bank(&self, source: BankSource) -> &dyn BankTrait {
        // banks[] follows BankSource::ALL, which is declaration order
        self.banks[source as usize].as_ref()
    }

    /// Upper bound on answering one bank request, fetch and extraction included.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}
