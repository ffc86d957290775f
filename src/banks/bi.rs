use crate::common::{BankSource, BankTrait, ColumnMap, NumberFormat, SourceDescriptor};
use crate::create_bank;
use async_trait::async_trait;

// BI publishes "Kurs Jual" (sell) before "Kurs Beli" (buy).
pub const BI_DESCRIPTOR: SourceDescriptor = SourceDescriptor {
    source: BankSource::Bi,
    name: "BI - Bank Indonesia",
    url: "https://www.bi.go.id/id/statistik/informasi-kurs/transaksi-bi/default.aspx",
    row_locator: ".table-lg tbody tr",
    cell_locator: None,
    columns: ColumnMap {
        currency: 1,
        buy: 4,
        sell: 3,
    },
    number_format: NumberFormat::DotThousands,
};

create_bank!(Bi, BI_DESCRIPTOR);

#[async_trait]
impl BankTrait for Bi {
    fn descriptor(&self) -> &'static SourceDescriptor {
        &BI_DESCRIPTOR
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
