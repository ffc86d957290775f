use crate::common::document::{RateDocument, TableRow, parse_locator};
use crate::common::{CurrencyRecord, RateScraperError, SourceDescriptor, parse_rate};
use scraper::Selector;
use tracing::{debug, warn};

/// Read every row matched by the descriptor's locator into a record, in document order.
///
/// Rows are never dropped: an empty currency cell still yields a record, and an
/// unparsable rate becomes `None` with a warning.
pub fn extract_records(
    body: &str,
    descriptor: &SourceDescriptor,
) -> Result<Vec<CurrencyRecord>, RateScraperError> {
    let cell_locator = descriptor.cell_locator.map(parse_locator).transpose()?;
    let document = RateDocument::parse(body);
    let rows = document.rows(descriptor.row_locator)?;

    if rows.is_empty() {
        warn!(
            bank = %descriptor.source,
            locator = descriptor.row_locator,
            "no rate rows matched, page layout may have changed"
        );
        return Ok(Vec::new());
    }

    let reader = CellReader {
        descriptor,
        cell_locator: cell_locator.as_ref(),
    };
    let records: Vec<CurrencyRecord> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| reader.read_record(row, index))
        .collect();

    debug!(bank = %descriptor.source, rows = records.len(), "extracted rate rows");
    Ok(records)
}

struct CellReader<'d> {
    descriptor: &'d SourceDescriptor,
    cell_locator: Option<&'d Selector>,
}

impl CellReader<'_> {
    fn read_record(&self, row: &TableRow<'_>, index: usize) -> CurrencyRecord {
        let columns = self.descriptor.columns;

        CurrencyRecord {
            currency: self.text(row, columns.currency),
            buy: self.read_rate(row, columns.buy, "buy", index),
            sell: self.read_rate(row, columns.sell, "sell", index),
        }
    }

    fn text(&self, row: &TableRow<'_>, position: usize) -> String {
        match self.cell_locator {
            Some(inner) => row.cell_text_within(position, inner),
            None => row.cell_text(position),
        }
    }

    fn read_rate(&self, row: &TableRow<'_>, position: usize, field: &str, index: usize) -> Option<f64> {
        let text = self.text(row, position);
        let rate = parse_rate(&text, self.descriptor.number_format);
        if rate.is_none() {
            warn!(
                bank = %self.descriptor.source,
                row = index,
                field,
                cell = %text,
                "unparsable rate cell"
            );
        }
        rate
    }
}
