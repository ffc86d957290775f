use crate::common::RateScraperError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of a bank's kurs table.
///
/// `buy` and `sell` are `None` when the cell could not be parsed, so a missing
/// rate is never confused with a quoted rate of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub currency: String,
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

/// Result envelope of a single extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSnapshot {
    bank: String,
    timestamp: DateTime<Utc>,
    data: Vec<CurrencyRecord>,
}

impl RateSnapshot {
    /// Build the envelope once; bank and timestamp are fixed from here on.
    pub fn assemble(
        bank: impl Into<String>,
        captured_at: DateTime<Utc>,
        records: Vec<CurrencyRecord>,
    ) -> Self {
        Self {
            bank: bank.into(),
            timestamp: captured_at,
            data: records,
        }
    }

    pub fn bank(&self) -> &str {
        &self.bank
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.data
    }

    pub fn to_json(&self) -> Result<String, RateScraperError> {
        Ok(serde_json::to_string(self)?)
    }
}
