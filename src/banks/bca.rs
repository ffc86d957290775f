use crate::common::{BankSource, BankTrait, ColumnMap, NumberFormat, SourceDescriptor};
use crate::create_bank;
use async_trait::async_trait;

// Cell values sit in <p> (the currency code inside <span><p>); other cell text is ignored.
pub const BCA_DESCRIPTOR: SourceDescriptor = SourceDescriptor {
    source: BankSource::Bca,
    name: "BCA - Bank Central Asia",
    url: "https://www.bca.co.id/id/informasi/kurs",
    row_locator: ".m-table-kurs tbody tr",
    cell_locator: Some("p"),
    columns: ColumnMap {
        currency: 1,
        buy: 2,
        sell: 3,
    },
    number_format: NumberFormat::DotThousands,
};

create_bank!(Bca, BCA_DESCRIPTOR);

#[async_trait]
impl BankTrait for Bca {
    fn descriptor(&self) -> &'static SourceDescriptor {
        &BCA_DESCRIPTOR
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
