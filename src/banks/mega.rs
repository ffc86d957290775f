use crate::common::{BankSource, BankTrait, ColumnMap, NumberFormat, SourceDescriptor};
use crate::create_bank;
use async_trait::async_trait;

// The treasury page has no class or id on its table, so every table row on the
// page is read. Any unrelated table added to the page will show up as records.
pub const MEGA_DESCRIPTOR: SourceDescriptor = SourceDescriptor {
    source: BankSource::Mega,
    name: "MEGA - Bank Mega",
    url: "https://www.bankmega.com/id/bisnis/treasury/",
    row_locator: "table tbody tr",
    cell_locator: None,
    columns: ColumnMap {
        currency: 1,
        buy: 2,
        sell: 3,
    },
    number_format: NumberFormat::CommaThousands,
};

create_bank!(Mega, MEGA_DESCRIPTOR);

#[async_trait]
impl BankTrait for Mega {
    fn descriptor(&self) -> &'static SourceDescriptor {
        &MEGA_DESCRIPTOR
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
