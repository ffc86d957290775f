use crate::common::{BankSource, DEFAULT_FETCH_TIMEOUT, RateScraperError};
use std::{
    collections::HashMap,
    net::{Ipv4Addr, SocketAddr, SocketAddrV4},
    time::Duration,
};

const DEFAULT_LISTEN_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 2021));
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    /// Upper bound on a single bank page download.
    pub fetch_timeout: Duration,
    /// Upper bound on answering a whole bank request. Must not be shorter than `fetch_timeout`.
    pub request_timeout: Duration,
    pub log_format: LogFormat,
    /// Per-bank page overrides; banks without an entry use their published URL.
    pub source_urls: HashMap<BankSource, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            log_format: LogFormat::Text,
            source_urls: HashMap::new(),
        }
    }
}

impl Config {
    /// Read `KURS_*` variables, loading `.env` first when present.
    pub fn from_env() -> Result<Self, RateScraperError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RateScraperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("KURS_LISTEN_ADDR")
            .map(|raw| {
                raw.parse::<SocketAddr>().map_err(|e| {
                    RateScraperError::ConfigError(format!("Invalid KURS_LISTEN_ADDR: {}", e))
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_LISTEN_ADDR);

        let fetch_timeout = parse_millis(&lookup, "KURS_FETCH_TIMEOUT_MS")?
            .unwrap_or(DEFAULT_FETCH_TIMEOUT);
        let request_timeout = parse_millis(&lookup, "KURS_REQUEST_TIMEOUT_MS")?
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        if request_timeout < fetch_timeout {
            return Err(RateScraperError::ConfigError(format!(
                "KURS_REQUEST_TIMEOUT_MS ({} ms) is shorter than KURS_FETCH_TIMEOUT_MS ({} ms)",
                request_timeout.as_millis(),
                fetch_timeout.as_millis()
            )));
        }

        let log_format = match lookup("KURS_LOG_FORMAT") {
            Some(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(value) if value.eq_ignore_ascii_case("text") => LogFormat::Text,
            None => LogFormat::Text,
            Some(other) => {
                return Err(RateScraperError::ConfigError(format!(
                    "Invalid KURS_LOG_FORMAT: {}",
                    other
                )));
            }
        };

        let source_urls = BankSource::ALL
            .into_iter()
            .filter_map(|source| {
                let key = format!("KURS_{}_URL", source.slug().to_uppercase());
                lookup(&key)
                    .filter(|url| !url.trim().is_empty())
                    .map(|url| (source, url))
            })
            .collect();

        Ok(Self {
            listen_addr,
            fetch_timeout,
            request_timeout,
            log_format,
            source_urls,
        })
    }

    pub fn with_source_url(mut self, source: BankSource, url: impl Into<String>) -> Self {
        self.source_urls.insert(source, url.into());
        self
    }
}

fn parse_millis<F>(lookup: &F, key: &str) -> Result<Option<Duration>, RateScraperError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| RateScraperError::ConfigError(format!("Invalid {}: {}", key, raw)))
        })
        .transpose()
}
