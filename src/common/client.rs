use crate::common::RateScraperError;
use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("kurs-scraper-rs/", env!("CARGO_PKG_VERSION"));

pub fn create_http_client(timeout: Duration) -> Result<reqwest::Client, RateScraperError> {
    Ok(reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}
