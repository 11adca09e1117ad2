//! Table elements (w:tbl, w:tr, w:tc)

mod cell;
mod row;

pub use cell::{TableCell, TableCellProperties, VMerge};
pub use row::TableRow;

use crate::error::Result;
use crate::xml::{skip_element, unexpected_eof};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Table element (w:tbl)
#[derive(Clone, Debug, Default)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
}

/// Position of a stored cell: (row index, cell index within the row)
type CellPos = (usize, usize);

/// Widest table grid Word produces; larger spans and offsets are clamped to it
const MAX_GRID_COLUMNS: u32 = 63;

impl Table {
    /// Parse from reader (after w:tbl start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut table = Table::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tr" => {
                        let row = TableRow::from_reader(reader, &e)?;
                        table.rows.push(row);
                    }
                    // tblPr, tblGrid and anything else carry no cell text
                    _ => skip_element(reader, &e)?,
                },
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"tbl" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:tbl")),
                _ => {}
            }
            buf.clear();
        }

        Ok(table)
    }

    /// Get row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter()
    }

    /// Get row by index
    pub fn row(&self, index: usize) -> Option<&TableRow> {
        self.rows.get(index)
    }

    /// Cells of every row, laid out on the table grid.
    ///
    /// A cell spanning `n` grid columns appears `n` times. A cell continuing a
    /// vertical merge is replaced by the cell it continues, taken from the cell
    /// starting at the same grid column in the row above. Grid columns skipped
    /// before or after a row's cells produce nothing. Spans and offsets wider
    /// than 63 grid columns are clamped.
    pub fn layout(&self) -> Vec<Vec<&TableCell>> {
        let positions = self.layout_positions();
        positions
            .iter()
            .map(|row| row.iter().map(|&(r, c)| &self.rows[r].cells[c]).collect())
            .collect()
    }

    /// Layout cells of one row, see [`Table::layout`]
    pub fn row_cells(&self, index: usize) -> Vec<&TableCell> {
        self.layout().into_iter().nth(index).unwrap_or_default()
    }

    fn layout_positions(&self) -> Vec<Vec<CellPos>> {
        let mut layout = Vec::with_capacity(self.rows.len());
        // For the previous row: (grid offset, origin cell, copies) per stored cell
        let mut above: Vec<(u32, CellPos, u32)> = Vec::new();

        for (r, row) in self.rows.iter().enumerate() {
            let mut positions = Vec::new();
            let mut current = Vec::with_capacity(row.cells.len());
            let mut offset = row.grid_before;
            if offset > MAX_GRID_COLUMNS {
                log::warn!(
                    "row {}: clamping gridBefore {} to {}",
                    r,
                    offset,
                    MAX_GRID_COLUMNS
                );
                offset = MAX_GRID_COLUMNS;
            }

            for (c, cell) in row.cells.iter().enumerate() {
                let mut span = cell.grid_span();
                if span > MAX_GRID_COLUMNS {
                    log::warn!(
                        "row {} cell {}: clamping gridSpan {} to {}",
                        r,
                        c,
                        span,
                        MAX_GRID_COLUMNS
                    );
                    span = MAX_GRID_COLUMNS;
                }
                let (origin, copies) = if cell.is_v_merge_continue() {
                    match above.iter().find(|(o, _, _)| *o == offset) {
                        Some(&(_, origin, copies)) => (origin, copies),
                        None => {
                            log::warn!(
                                "row {} cell {}: vertical merge continues nothing at grid column {}",
                                r,
                                c,
                                offset
                            );
                            ((r, c), span)
                        }
                    }
                } else {
                    ((r, c), span)
                };

                positions.extend(std::iter::repeat(origin).take(copies as usize));
                current.push((offset, origin, copies));
                offset = offset.saturating_add(span);
            }

            above = current;
            layout.push(positions);
        }

        layout
    }
}
