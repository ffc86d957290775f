use crate::common::extract::extract_records;
use crate::common::{NumberFormat, RateScraperError, RateSnapshot};
use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

// Common bank enum definition

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BankSource {
    Bca,
    Bi,
    Bni,
    Mega,
}

impl BankSource {
    pub const ALL: [BankSource; 4] = [
        BankSource::Bca,
        BankSource::Bi,
        BankSource::Bni,
        BankSource::Mega,
    ];

    /// Route segment serving this bank, e.g. `bca`.
    pub fn slug(&self) -> &'static str {
        match self {
            BankSource::Bca => "bca",
            BankSource::Bi => "bi",
            BankSource::Bni => "bni",
            BankSource::Mega => "mega",
        }
    }

    pub fn path(&self) -> String {
        format!("/{}", self.slug())
    }

    pub fn descriptor(&self) -> &'static SourceDescriptor {
        match self {
            BankSource::Bca => &crate::banks::bca::BCA_DESCRIPTOR,
            BankSource::Bi => &crate::banks::bi::BI_DESCRIPTOR,
            BankSource::Bni => &crate::banks::bni::BNI_DESCRIPTOR,
            BankSource::Mega => &crate::banks::mega::MEGA_DESCRIPTOR,
        }
    }
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug().to_uppercase())
    }
}

/// 1-based `td` positions of each field within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub currency: usize,
    pub buy: usize,
    pub sell: usize,
}

/// Everything that distinguishes one bank page from another.
#[derive(Debug, Clone, Copy)]
pub struct SourceDescriptor {
    pub source: BankSource,
    /// Label written to the snapshot's `bank` field.
    pub name: &'static str,
    /// Default page location, overridable per bank instance.
    pub url: &'static str,
    /// CSS selector matching one element per data row.
    pub row_locator: &'static str,
    /// When set, only cell descendants matching this selector are read.
    pub cell_locator: Option<&'static str>,
    pub columns: ColumnMap,
    pub number_format: NumberFormat,
}

// Common bank trait definition
#[async_trait]
pub trait BankTrait: Send + Sync {
    // Bank specific methods
    fn descriptor(&self) -> &'static SourceDescriptor;
    fn source_url(&self) -> &str;
    fn client(&self) -> &reqwest::Client;

    // Default implementations
    fn bank_name(&self) -> &str {
        self.descriptor().name
    }

    /// Download the raw page body. Non-2xx responses are errors.
    async fn fetch_page(&self) -> Result<String, RateScraperError> {
        let url = self.source_url();
        debug!(bank = self.bank_name(), url, "fetching rate page");

        let response = self
            .client()
            .get(url)
            .send()
            .await
            .map_err(|e| classify_fetch_error(self.descriptor().source, e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(RateScraperError::FetchError {
                bank: self.descriptor().source.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_fetch_error(self.descriptor().source, e))
    }

    /// Fetch the page and turn its rate table into a fresh snapshot.
    async fn fetch_snapshot(&self) -> Result<RateSnapshot, RateScraperError> {
        let body = self.fetch_page().await?;
        let captured_at = Utc::now();
        let records = extract_records(&body, self.descriptor())?;
        Ok(RateSnapshot::assemble(self.bank_name(), captured_at, records))
    }
}

fn classify_fetch_error(source: BankSource, err: reqwest::Error) -> RateScraperError {
    if err.is_timeout() {
        RateScraperError::Timeout {
            bank: source.to_string(),
        }
    } else {
        RateScraperError::HttpError(err)
    }
}

// BANK MACRO EXPORTS
#[macro_export]
macro_rules! create_bank {
    (
        $struct_name:ident, $descriptor:expr
    ) => {
        pub struct $struct_name {
            client: reqwest::Client,
            source_url: String,
        }

        impl $struct_name {
            pub fn new(client: reqwest::Client) -> Self {
                Self {
                    client,
                    source_url: $descriptor.url.to_string(),
                }
            }

            /// Point this bank at a different page, e.g. after the bank moves it.
            pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
                self.source_url = url.into();
                self
            }
        }
    };
}
