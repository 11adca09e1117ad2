//! Paragraph element (w:p)

use crate::document::Run;
use crate::error::Result;
use crate::xml::{skip_element, unexpected_eof};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Paragraph element (w:p)
#[derive(Clone, Debug, Default)]
pub struct Paragraph {
    /// Paragraph content (runs and hyperlinks)
    pub content: Vec<ParagraphContent>,
}

/// Text-bearing content within a paragraph
#[derive(Clone, Debug)]
pub enum ParagraphContent {
    /// Text run
    Run(Run),
    /// Hyperlink
    Hyperlink(Hyperlink),
}

/// Hyperlink element (w:hyperlink), only its runs carry text
#[derive(Clone, Debug, Default)]
pub struct Hyperlink {
    /// Content runs
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Parse paragraph from reader (after w:p start tag)
    ///
    /// Only runs and hyperlinks directly under the paragraph are kept; tracked
    /// insertions, smart tags, content controls and simple fields are skipped.
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut para = Paragraph::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"r" => {
                        let run = Run::from_reader(reader, &e)?;
                        para.content.push(ParagraphContent::Run(run));
                    }
                    b"hyperlink" => {
                        let link = Hyperlink::from_reader(reader, &e)?;
                        para.content.push(ParagraphContent::Hyperlink(link));
                    }
                    _ => skip_element(reader, &e)?,
                },
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"p" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:p")),
                _ => {}
            }
            buf.clear();
        }

        Ok(para)
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            match content {
                ParagraphContent::Run(run) => {
                    result.push_str(&run.text());
                }
                ParagraphContent::Hyperlink(link) => {
                    result.push_str(&link.text());
                }
            }
        }
        result
    }

    /// Get all runs directly under the paragraph
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.content.iter().filter_map(|c| {
            if let ParagraphContent::Run(r) = c {
                Some(r)
            } else {
                None
            }
        })
    }
}

impl Hyperlink {
    /// Parse from reader (after w:hyperlink start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut link = Hyperlink::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    if e.name().local_name().as_ref() == b"r" {
                        let run = Run::from_reader(reader, &e)?;
                        link.runs.push(run);
                    } else {
                        skip_element(reader, &e)?;
                    }
                }
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"hyperlink" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:hyperlink")),
                _ => {}
            }
            buf.clear();
        }

        Ok(link)
    }

    /// Text of the hyperlink's runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::reader_from_str;

    fn parse_paragraph(xml: &str) -> Paragraph {
        let mut reader = reader_from_str(xml);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) if e.name().local_name().as_ref() == b"p" => {
                    let e = e.into_owned();
                    return Paragraph::from_reader(&mut reader, &e).unwrap();
                }
                Event::Eof => panic!("no paragraph in {xml}"),
                _ => {}
            }
            buf.clear();
        }
    }

    #[test]
    fn test_runs_are_concatenated() {
        let para = parse_paragraph(
            r#"<w:p w:rsidR="00A1"><w:pPr><w:pStyle w:val="Heading1"/><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>Name:</w:t></w:r><w:r><w:t xml:space="preserve"> Jane Doe</w:t></w:r></w:p>"#,
        );
        assert_eq!(para.text(), "Name: Jane Doe");
        assert_eq!(para.runs().count(), 2);
    }

    #[test]
    fn test_hyperlink_text_is_included() {
        let para = parse_paragraph(
            r#"<w:p><w:r><w:t xml:space="preserve">Site: </w:t></w:r><w:hyperlink r:id="rId7" w:history="1"><w:r><w:rPr><w:rStyle w:val="Hyperlink"/></w:rPr><w:t>example.com</w:t></w:r></w:hyperlink></w:p>"#,
        );
        assert_eq!(para.text(), "Site: example.com");
        assert_eq!(para.runs().count(), 1);

        match &para.content[1] {
            ParagraphContent::Hyperlink(link) => assert_eq!(link.runs.len(), 1),
            other => panic!("expected hyperlink, got {other:?}"),
        }
    }

    #[test]
    fn test_other_containers_are_skipped() {
        let para = parse_paragraph(
            r#"<w:p><w:ins w:id="1"><w:r><w:t>inserted</w:t></w:r></w:ins><w:r><w:t>kept</w:t></w:r><w:bookmarkStart w:id="0" w:name="x"/><w:fldSimple w:instr="PAGE"><w:r><w:t>1</w:t></w:r></w:fldSimple><w:r/></w:p>"#,
        );
        assert_eq!(para.text(), "kept");
    }

    #[test]
    fn test_empty_paragraph() {
        let para = parse_paragraph(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr></w:p>"#);
        assert!(para.content.is_empty());
        assert_eq!(para.text(), "");
    }

    #[test]
    fn test_unclosed_hyperlink_fails() {
        let mut reader =
            reader_from_str(r#"<w:p><w:hyperlink r:id="rId7"><w:r><w:t>x</w:t></w:r>"#);
        let mut buf = Vec::new();
        let start = match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(e) => e.into_owned(),
            other => panic!("unexpected {other:?}"),
        };

        match Paragraph::from_reader(&mut reader, &start) {
            Err(crate::Error::InvalidDocument(msg)) => {
                assert_eq!(msg, "unexpected end of <w:hyperlink>")
            }
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }
}
