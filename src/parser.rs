//! HTML parser for the match-log table.
//!
//! Reduces the document to a [`RawTable`]: rows in document order, each the
//! trimmed text of its `<td>` cells. Header cells (`<th>`) are not data.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Error, Result};

/// Table id used by the upstream provider for a squad's match log.
pub const DEFAULT_TABLE_ID: &str = "matchlogs_for";

/// Ordered rows of data-cell text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        RawTable {
            rows: rows
                .into_iter()
                .map(|r| r.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// Finds `<table id="{table_id}">` in `html` and collects its rows.
///
/// # Errors
///
/// Returns [`Error::SchemaNotFound`] if no such table exists.
pub fn parse_table(html: &str, table_id: &str) -> Result<RawTable> {
    let document = Html::parse_document(html);
    let table_selector = selector("table");
    let row_selector = selector("tr");
    let cell_selector = selector("td");

    let table = document
        .select(&table_selector)
        .find(|t| t.value().id() == Some(table_id))
        .ok_or_else(|| Error::SchemaNotFound {
            table_id: table_id.to_string(),
        })?;

    let rows: Vec<Vec<String>> = table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(cell_text).collect())
        .collect();

    debug!(table_id, rows = rows.len(), "Table located");
    Ok(RawTable { rows })
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let text: String = cell.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
