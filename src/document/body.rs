//! Document body and block-level content

use crate::document::{Paragraph, Table};
use crate::error::Result;
use crate::xml::{skip_element, unexpected_eof};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;
use std::slice;

/// Block-level content in a document body
#[derive(Clone, Debug)]
pub enum BlockContent {
    /// Paragraph
    Paragraph(Paragraph),
    /// Table
    Table(Table),
}

/// Document body (w:body)
#[derive(Clone, Debug, Default)]
pub struct Body {
    /// Block-level content, in document order
    pub content: Vec<BlockContent>,
}

impl Body {
    /// Parse body from XML reader (after w:body start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut body = Body::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"p" => {
                        let para = Paragraph::from_reader(reader, &e)?;
                        body.content.push(BlockContent::Paragraph(para));
                    }
                    b"tbl" => {
                        let table = Table::from_reader(reader, &e)?;
                        body.content.push(BlockContent::Table(table));
                    }
                    other => {
                        log::trace!("skipping body element {}", String::from_utf8_lossy(other));
                        skip_element(reader, &e)?;
                    }
                },
                Event::Empty(e) => {
                    if e.name().local_name().as_ref() == b"p" {
                        body.content.push(BlockContent::Paragraph(Paragraph::default()));
                    }
                }
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"body" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:body")),
                _ => {}
            }
            buf.clear();
        }

        Ok(body)
    }

    /// Get all body-level paragraphs
    pub fn paragraphs(&self) -> Paragraphs<'_> {
        Paragraphs {
            inner: self.content.iter(),
        }
    }

    /// Get all body-level tables
    pub fn tables(&self) -> Tables<'_> {
        Tables {
            inner: self.content.iter(),
        }
    }
}

/// Iterator over the paragraphs of a [`Body`]
#[derive(Clone, Debug)]
pub struct Paragraphs<'a> {
    inner: slice::Iter<'a, BlockContent>,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a Paragraph;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|c| match c {
            BlockContent::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}

/// Iterator over the tables of a [`Body`]
#[derive(Clone, Debug)]
pub struct Tables<'a> {
    inner: slice::Iter<'a, BlockContent>,
}

impl<'a> Iterator for Tables<'a> {
    type Item = &'a Table;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|c| match c {
            BlockContent::Table(t) => Some(t),
            _ => None,
        })
    }
}
