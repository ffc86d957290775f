#[derive(thiserror::Error, Debug)]
pub enum RateScraperError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{bank} fetch timed out")]
    Timeout { bank: String },

    #[error("{bank} fetch error: HTTP {status}")]
    FetchError { bank: String, status: u16 },

    #[error("Invalid row locator: {0}")]
    SelectorError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl RateScraperError {
    /// True for failures caused by the remote bank page rather than by this service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RateScraperError::HttpError(_)
                | RateScraperError::Timeout { .. }
                | RateScraperError::FetchError { .. }
        )
    }
}
