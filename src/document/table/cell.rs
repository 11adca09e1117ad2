//! Table cell elements (w:tc, w:tcPr)

use crate::document::{Paragraph, Table};
use crate::error::Result;
use crate::xml::{get_w_val, skip_element, unexpected_eof};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Table cell (w:tc)
#[derive(Clone, Debug, Default)]
pub struct TableCell {
    /// Cell properties
    pub properties: TableCellProperties,
    /// Paragraphs directly in the cell
    pub paragraphs: Vec<Paragraph>,
    /// Tables nested in the cell
    pub tables: Vec<Table>,
}

/// Table cell properties that affect the cell layout
#[derive(Clone, Debug, Default)]
pub struct TableCellProperties {
    /// Grid span (horizontal merge)
    pub grid_span: Option<u32>,
    /// Vertical merge
    pub v_merge: Option<VMerge>,
}

/// Vertical merge type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VMerge {
    /// Start of a new vertical merge group
    Restart,
    /// Continuation of a vertical merge
    Continue,
}

impl TableCell {
    /// Parse from reader (after w:tc start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut cell = TableCell::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"tcPr" => {
                        cell.properties = TableCellProperties::from_reader(reader)?;
                    }
                    b"p" => {
                        let para = Paragraph::from_reader(reader, &e)?;
                        cell.paragraphs.push(para);
                    }
                    b"tbl" => {
                        let table = Table::from_reader(reader, &e)?;
                        cell.tables.push(table);
                    }
                    _ => skip_element(reader, &e)?,
                },
                Event::Empty(e) => match e.name().local_name().as_ref() {
                    b"p" => cell.paragraphs.push(Paragraph::default()),
                    b"tcPr" => cell.properties = TableCellProperties::default(),
                    _ => {}
                },
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"tc" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:tc")),
                _ => {}
            }
            buf.clear();
        }

        Ok(cell)
    }

    /// Get cell text (paragraph texts joined by newlines)
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Iterate over paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    /// Number of grid columns this cell spans (at least 1)
    pub fn grid_span(&self) -> u32 {
        self.properties.grid_span.unwrap_or(1).max(1)
    }

    /// Get vertical merge status
    pub fn v_merge(&self) -> Option<VMerge> {
        self.properties.v_merge
    }

    /// Check if this cell continues a vertical merge
    pub fn is_v_merge_continue(&self) -> bool {
        self.v_merge() == Some(VMerge::Continue)
    }
}

impl TableCellProperties {
    /// Parse from reader (after w:tcPr start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut props = TableCellProperties::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    // <w:vMerge ...></w:vMerge> is rare but legal
                    props.apply(&e);
                    skip_element(reader, &e)?;
                }
                Event::Empty(e) => props.apply(&e),
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"tcPr" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:tcPr")),
                _ => {}
            }
            buf.clear();
        }

        Ok(props)
    }

    fn apply(&mut self, e: &BytesStart) {
        match e.name().local_name().as_ref() {
            b"gridSpan" => {
                let val = get_w_val(e);
                self.grid_span = val.as_deref().and_then(|v| v.trim().parse().ok());
                if self.grid_span.is_none() {
                    log::warn!("ignoring unparsable gridSpan value {:?}", val);
                }
            }
            b"vMerge" => {
                self.v_merge = Some(match get_w_val(e).as_deref() {
                    Some("restart") => VMerge::Restart,
                    _ => VMerge::Continue,
                });
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::reader_from_str;

    fn parse_cell(xml: &str) -> TableCell {
        let mut reader = reader_from_str(xml);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) if e.name().local_name().as_ref() == b"tc" => {
                    let e = e.into_owned();
                    return TableCell::from_reader(&mut reader, &e).unwrap();
                }
                Event::Eof => panic!("no cell in {xml}"),
                _ => {}
            }
            buf.clear();
        }
    }

    #[test]
    fn test_cell_text_joins_paragraphs() {
        let cell = parse_cell(
            r#"<w:tc><w:tcPr><w:tcW w:w="2000" w:type="dxa"/></w:tcPr><w:p><w:r><w:t>Rust</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>Go</w:t></w:r></w:p></w:tc>"#,
        );
        assert_eq!(cell.text(), "Rust\n\nGo");
        assert_eq!(cell.paragraphs().count(), 3);
        assert_eq!(cell.grid_span(), 1);
        assert_eq!(cell.v_merge(), None);
    }

    #[test]
    fn test_merge_properties() {
        let cell = parse_cell(
            r#"<w:tc><w:tcPr><w:gridSpan w:val="3"/><w:vMerge w:val="restart"/></w:tcPr><w:p/></w:tc>"#,
        );
        assert_eq!(cell.grid_span(), 3);
        assert_eq!(cell.v_merge(), Some(VMerge::Restart));

        let cell = parse_cell(r#"<w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc>"#);
        assert!(cell.is_v_merge_continue());

        let cell = parse_cell(r#"<w:tc><w:tcPr><w:gridSpan w:val="0"/></w:tcPr><w:p/></w:tc>"#);
        assert_eq!(cell.grid_span(), 1);
    }

    #[test]
    fn test_nested_table_text_is_not_cell_text() {
        let cell = parse_cell(
            r#"<w:tc><w:p><w:r><w:t>outer</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p/></w:tc>"#,
        );
        assert_eq!(cell.text(), "outer\n");
        assert_eq!(cell.tables.len(), 1);
        assert_eq!(cell.tables[0].rows[0].cells[0].text(), "inner");
    }

    #[test]
    fn test_unclosed_cell_fails() {
        let mut reader = reader_from_str(r#"<w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p/>"#);
        let mut buf = Vec::new();
        let start = match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(e) => e.into_owned(),
            other => panic!("unexpected {other:?}"),
        };

        match TableCell::from_reader(&mut reader, &start) {
            Err(crate::Error::InvalidDocument(msg)) => assert_eq!(msg, "unexpected end of <w:tc>"),
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }
}
