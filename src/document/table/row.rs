//! Table row elements (w:tr)

use crate::error::Result;
use crate::xml::{get_w_val, skip_element, unexpected_eof};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

use super::cell::TableCell;

/// Table row (w:tr)
#[derive(Clone, Debug, Default)]
pub struct TableRow {
    /// Grid columns skipped before the first cell (w:gridBefore)
    pub grid_before: u32,
    /// Cells, as stored in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Parse from reader (after w:tr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut row = TableRow::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"trPr" => parse_row_properties(reader, &mut row)?,
                    b"tc" => {
                        let cell = TableCell::from_reader(reader, &e)?;
                        row.cells.push(cell);
                    }
                    _ => skip_element(reader, &e)?,
                },
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"tr" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:tr")),
                _ => {}
            }
            buf.clear();
        }

        Ok(row)
    }

    /// Get cell count
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Iterate over cells as stored (no merge expansion)
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.cells.iter()
    }
}

/// Parse the leading grid offset out of w:trPr
fn parse_row_properties<R: BufRead>(reader: &mut Reader<R>, row: &mut TableRow) -> Result<()> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Empty(e) => {
                if e.name().local_name().as_ref() == b"gridBefore" {
                    row.grid_before = get_w_val(&e)
                        .and_then(|v| v.trim().parse().ok())
                        .unwrap_or(0);
                }
            }
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(e) => {
                if e.name().local_name().as_ref() == b"trPr" {
                    break;
                }
            }
            Event::Eof => return Err(unexpected_eof("w:trPr")),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
