//! Thin facade over `scraper` for reading rate tables.
//!
//! The parsed tree is not `Send`, so a [`RateDocument`] must be built and dropped
//! without an `.await` in between.

use crate::common::RateScraperError;
use scraper::{ElementRef, Html, Selector};

pub struct RateDocument {
    html: Html,
}

impl RateDocument {
    /// Parse a page body. html5ever recovers from broken markup, so this never fails.
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All elements matching `locator`, in document order.
    pub fn rows(&self, locator: &str) -> Result<Vec<TableRow<'_>>, RateScraperError> {
        let selector = parse_locator(locator)?;
        Ok(self.html.select(&selector).map(TableRow).collect())
    }
}

pub fn parse_locator(locator: &str) -> Result<Selector, RateScraperError> {
    Selector::parse(locator)
        .map_err(|e| RateScraperError::SelectorError(format!("{}: {}", locator, e)))
}

#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a>(ElementRef<'a>);

impl<'a> TableRow<'a> {
    /// Trimmed text of the `position`-th (1-based) element child, like `td:nth-child(n)`.
    /// Returns an empty string when the row has no such `td`.
    pub fn cell_text(&self, position: usize) -> String {
        self.cell(position).map(element_text).unwrap_or_default()
    }

    /// Like [`cell_text`](Self::cell_text), but reads only the descendants matching `inner`.
    /// A cell with no match reads as empty.
    pub fn cell_text_within(&self, position: usize, inner: &Selector) -> String {
        self.cell(position)
            .map(|cell| {
                cell.select(inner)
                    .flat_map(|matched| matched.text())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .unwrap_or_default()
    }

    fn cell(&self, position: usize) -> Option<ElementRef<'a>> {
        if position == 0 {
            return None;
        }

        self.0
            .children()
            .filter_map(ElementRef::wrap)
            .nth(position - 1)
            .filter(|cell| cell.value().name() == "td")
    }
}

// Concatenate every descendant text node, so inline wrappers (<span><p>..</p></span>) are read through
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
