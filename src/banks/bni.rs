use crate::common::{BankSource, BankTrait, ColumnMap, NumberFormat, SourceDescriptor};
use crate::create_bank;
use async_trait::async_trait;

pub const BNI_DESCRIPTOR: SourceDescriptor = SourceDescriptor {
    source: BankSource::Bni,
    name: "BNI - Bank Negara Indonesia",
    url: "https://www.bni.co.id/id-id/beranda/informasivalas",
    row_locator: "#dnn_ctr3510_BNIValasInfoView_divBankNotes table tbody tr",
    cell_locator: None,
    columns: ColumnMap {
        currency: 1,
        buy: 2,
        sell: 3,
    },
    number_format: NumberFormat::DotThousands,
};

create_bank!(Bni, BNI_DESCRIPTOR);

#[async_trait]
impl BankTrait for Bni {
    fn descriptor(&self) -> &'static SourceDescriptor {
        &BNI_DESCRIPTOR
    }

    fn source_url(&self) -> &str {
        &self.source_url
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
