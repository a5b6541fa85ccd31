// src/extract.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};

use crate::config::TABLE_SELECTOR;
use crate::error::{CheckError, Result};
use crate::record::Record;

fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Pull the `devices` table out of `html`, one [`Record`] per well-formed data row.
///
/// The first `tr` supplies the column names from its `th` cells. A later row
/// whose `td` count differs from the header count is skipped. A missing table
/// or a table without any rows is an error.
#[instrument(level = "debug", skip(html), fields(bytes = html.len()))]
pub fn extract_devices(html: &str) -> Result<Vec<Record>> {
    let table_sel = Selector::parse(TABLE_SELECTOR).expect("table selector should parse");
    let tr_sel = Selector::parse("tr").expect("row selector should parse");
    let th_sel = Selector::parse("th").expect("header selector should parse");
    let td_sel = Selector::parse("td").expect("cell selector should parse");

    let document = Html::parse_document(html);
    let table = document
        .select(&table_sel)
        .next()
        .ok_or(CheckError::StructureNotFound)?;

    let mut rows = table.select(&tr_sel);
    let header_row = rows.next().ok_or(CheckError::EmptyTable)?;
    let headers: Vec<String> = header_row.select(&th_sel).map(cell_text).collect();
    debug!(?headers, "header row");

    let mut devices: Vec<Record> = Vec::new();
    for (idx, tr) in rows.enumerate() {
        let cells: Vec<String> = tr.select(&td_sel).map(cell_text).collect();
        if cells.len() != headers.len() {
            debug!(row = idx + 1, cells = cells.len(), expected = headers.len(), "skipping row");
            continue;
        }
        devices.push(headers.iter().cloned().zip(cells).collect());
    }

    info!(count = devices.len(), columns = headers.len(), "extracted devices");
    Ok(devices)
}
