// src/parse.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// One table-body row, kept as raw cell text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// First cell: the location name.
    pub location: String,
    /// Second cell: the case count.
    pub cases: String,
    /// Third cell: whatever the page reports next to the count.
    pub extra: String,
}

impl Row {
    /// Pull the first three cells out of a `<tr>`.
    ///
    /// A cell is any `td` under the row that is the n-th child of its parent;
    /// when several match, their text is concatenated. No match gives "".
    pub fn from_element(row: ElementRef<'_>) -> Self {
        let [location, cases, extra] = cell_selectors().map(|sel| {
            row.select(&sel)
                .flat_map(|td| td.text())
                .collect::<String>()
        });
        Self {
            location,
            cases,
            extra,
        }
    }

    pub fn cells(&self) -> [&str; 3] {
        [self.location.as_str(), self.cases.as_str(), self.extra.as_str()]
    }

    /// Comma join of the three cells, no escaping.
    pub fn joined(&self) -> String {
        self.cells().join(",")
    }
}

fn cell_selectors() -> [Selector; 3] {
    [1, 2, 3].map(|n| {
        Selector::parse(&format!("td:nth-child({})", n)).expect("cell selector should parse")
    })
}

/// Every `tbody tr` in the document, in document order.
pub fn parse_rows(html: &str) -> Vec<Row> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("tbody tr").expect("row selector should parse");

    let rows: Vec<Row> = document
        .select(&selector)
        .map(Row::from_element)
        .inspect(|row| trace!(?row, "parsed row"))
        .collect();

    debug!(rows = rows.len(), "parsed table body rows");
    rows
}
