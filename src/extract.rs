//! Line extraction: paragraph text first, then table cell text

use crate::document::{Document, Paragraphs, TableCell, Tables};
use crate::error::Result;
use std::fmt;
use std::io::Write;
use std::iter::Enumerate;
use std::path::Path;

/// Where an extracted line came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// Body paragraph, by index among body paragraphs
    Paragraph { index: usize },
    /// Table cell, by table index, row index and layout column
    TableCell {
        table: usize,
        row: usize,
        column: usize,
    },
}

/// A non-empty, trimmed line of document text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub origin: Origin,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Line {
    /// Build a line from raw text, `None` if it is empty or whitespace only
    fn from_text(origin: Origin, text: &str) -> Option<Self> {
        let text = text.trim();
        (!text.is_empty()).then(|| Line {
            origin,
            text: text.to_string(),
        })
    }
}

/// Lazy iterator over the text lines of a [`Document`].
///
/// Yields every paragraph in document order, then every table cell (table
/// order, row order, layout-cell order). Empty and whitespace-only entries
/// are skipped.
#[derive(Debug)]
pub struct Lines<'a> {
    paragraphs: Enumerate<Paragraphs<'a>>,
    tables: Enumerate<Tables<'a>>,
    cells: std::vec::IntoIter<(Origin, &'a TableCell)>,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self {
            paragraphs: document.paragraphs().enumerate(),
            tables: document.tables().enumerate(),
            cells: Vec::new().into_iter(),
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        for (index, para) in self.paragraphs.by_ref() {
            if let Some(line) = Line::from_text(Origin::Paragraph { index }, &para.text()) {
                return Some(line);
            }
        }

        loop {
            for (origin, cell) in self.cells.by_ref() {
                if let Some(line) = Line::from_text(origin, &cell.text()) {
                    return Some(line);
                }
            }

            let (table_index, table) = self.tables.next()?;
            let cells: Vec<_> = table
                .layout()
                .into_iter()
                .enumerate()
                .flat_map(|(row, cells)| {
                    cells.into_iter().enumerate().map(move |(column, cell)| {
                        let origin = Origin::TableCell {
                            table: table_index,
                            row,
                            column,
                        };
                        (origin, cell)
                    })
                })
                .collect();
            log::debug!("table {} has {} layout cell(s)", table_index, cells.len());
            self.cells = cells.into_iter();
        }
    }
}

/// Write each line followed by a newline, returning the number written
pub fn write_lines<I, W>(lines: I, mut out: W) -> Result<usize>
where
    I: IntoIterator<Item = Line>,
    W: Write,
{
    let mut written = 0;
    for line in lines {
        writeln!(out, "{}", line)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Open a document and collect its text lines
pub fn extract_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = Document::open(path)?;
    Ok(doc.lines().map(|line| line.text).collect())
}
