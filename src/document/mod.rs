//! Document model - read-only view of a DOCX main document

mod body;
mod paragraph;
mod run;
mod table;

pub use body::{BlockContent, Body, Paragraphs, Tables};
pub use paragraph::{Hyperlink, Paragraph, ParagraphContent};
pub use run::{BreakType, Run, RunContent};
pub use table::{Table, TableCell, TableCellProperties, TableRow, VMerge};

use crate::error::{Error, Result};
use crate::extract::Lines;
use crate::opc::{Package, WORD_MAIN_DOCUMENTS};
use crate::xml::{reader_from_str, skip_element, unexpected_eof};
use quick_xml::events::Event;
use std::io::{Read, Seek};
use std::path::Path;

/// A DOCX document
#[derive(Clone, Debug, Default)]
pub struct Document {
    /// Parsed document body
    body: Body,
}

impl Document {
    /// Open a document from a file path
    ///
    /// The file is closed again once the main document part has been read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let package = Package::open(path)?;
        Self::from_package(package)
    }

    /// Open a document from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let package = Package::from_bytes(bytes)?;
        Self::from_package(package)
    }

    /// Open a document from any seekable reader
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let package = Package::from_reader(reader)?;
        Self::from_package(package)
    }

    /// Create document from an OPC package
    fn from_package<R: Read + Seek>(mut package: Package<R>) -> Result<Self> {
        let doc_part = package.main_document_part()?;

        let content_type = doc_part.content_type().unwrap_or_default();
        if !WORD_MAIN_DOCUMENTS.contains(&content_type) {
            return Err(Error::NotWordDocument {
                content_type: content_type.to_string(),
            });
        }

        let body = parse_document_xml(doc_part.data_as_str()?)?;
        log::debug!(
            "parsed {} with {} block(s)",
            doc_part.uri(),
            body.content.len()
        );

        Ok(Self { body })
    }

    /// Build a document directly from document.xml content
    pub fn from_xml(xml: &str) -> Result<Self> {
        Ok(Self {
            body: parse_document_xml(xml)?,
        })
    }

    /// Get all body-level paragraphs
    pub fn paragraphs(&self) -> Paragraphs<'_> {
        self.body.paragraphs()
    }

    /// Get paragraph count
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Get paragraph by index
    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        self.paragraphs().nth(index)
    }

    /// Get all body-level tables
    pub fn tables(&self) -> Tables<'_> {
        self.body.tables()
    }

    /// Get table count
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Get table by index
    pub fn table(&self, index: usize) -> Option<&Table> {
        self.tables().nth(index)
    }

    /// Get the document body
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Non-empty text lines: paragraphs first, then table cells
    pub fn lines(&self) -> Lines<'_> {
        Lines::new(self)
    }
}

/// Parse document.xml content
fn parse_document_xml(xml: &str) -> Result<Body> {
    let mut reader = reader_from_str(xml);
    let mut buf = Vec::new();
    let mut body = None;
    let mut open = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().local_name().as_ref() {
                b"body" => body = Some(Body::from_reader(&mut reader)?),
                b"document" => open = true,
                _ => skip_element(&mut reader, &e)?,
            },
            Event::Empty(e) => {
                if e.name().local_name().as_ref() == b"body" {
                    body = Some(Body::default());
                }
            }
            Event::End(e) if e.name().local_name().as_ref() == b"document" => open = false,
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if open {
        return Err(unexpected_eof("w:document"));
    }
    body.ok_or_else(|| Error::InvalidDocument("Missing w:body element".into()))
}
