pub mod bca;
pub mod bi;
pub mod bni;
pub mod mega;

use crate::common::{BankSource, BankTrait};

// Re-export
pub use bca::Bca;
pub use bi::Bi;
pub use bni::Bni;
pub use mega::Mega;

/// Instantiate the scraper for `source`, reading from `source_url` when given
/// instead of the bank's published page.
pub fn build_bank(
    source: BankSource,
    client: reqwest::Client,
    source_url: Option<String>,
) -> Box<dyn BankTrait> {
    let url = source_url.unwrap_or_else(|| source.descriptor().url.to_string());
    match source {
        BankSource::Bca => Box::new(Bca::new(client).with_source_url(url)),
        BankSource::Bi => Box::new(Bi::new(client).with_source_url(url)),
        BankSource::Bni => Box::new(Bni::new(client).with_source_url(url)),
        BankSource::Mega => Box::new(Mega::new(client).with_source_url(url)),
    }
}
