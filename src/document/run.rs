//! Run element (w:r) - a contiguous run of text with uniform formatting

use crate::error::Result;
use crate::xml::{get_attr, skip_element, unexpected_eof};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Run element (w:r)
#[derive(Clone, Debug, Default)]
pub struct Run {
    /// Run content, in document order
    pub content: Vec<RunContent>,
}

/// Text-bearing content within a run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunContent {
    /// Text (w:t)
    Text(String),
    /// Tab (w:tab) or absolute position tab (w:ptab)
    Tab,
    /// Break (w:br)
    Break(BreakType),
    /// Carriage return (w:cr)
    CarriageReturn,
    /// Soft hyphen (w:softHyphen)
    SoftHyphen,
    /// Non-breaking hyphen (w:noBreakHyphen)
    NoBreakHyphen,
}

/// Break type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BreakType {
    #[default]
    TextWrapping,
    Page,
    Column,
}

impl BreakType {
    fn from_element(e: &BytesStart) -> Self {
        match get_attr(e, "type").as_deref() {
            Some("page") => BreakType::Page,
            Some("column") => BreakType::Column,
            _ => BreakType::TextWrapping,
        }
    }
}

impl Run {
    /// Parse from reader (after w:r start tag)
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>, _start: &BytesStart) -> Result<Self> {
        let mut run = Run::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => match e.name().local_name().as_ref() {
                    b"t" => {
                        let text = read_text_content(reader)?;
                        run.content.push(RunContent::Text(text));
                    }
                    local => {
                        // Properties, drawings, field characters and the like carry no text
                        if let Some(content) = RunContent::from_marker(local, &e) {
                            run.content.push(content);
                        }
                        skip_element(reader, &e)?;
                    }
                },
                Event::Empty(e) => {
                    let local = e.name().local_name();
                    if let Some(content) = RunContent::from_marker(local.as_ref(), &e) {
                        run.content.push(content);
                    }
                }
                Event::End(e) => {
                    if e.name().local_name().as_ref() == b"r" {
                        break;
                    }
                }
                Event::Eof => return Err(unexpected_eof("w:r")),
                _ => {}
            }
            buf.clear();
        }

        Ok(run)
    }

    /// Get all text in this run
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            match content {
                RunContent::Text(t) => result.push_str(t),
                RunContent::Tab => result.push('\t'),
                RunContent::Break(BreakType::TextWrapping) => result.push('\n'),
                RunContent::CarriageReturn => result.push('\n'),
                RunContent::NoBreakHyphen => result.push('-'),
                RunContent::Break(_) | RunContent::SoftHyphen => {}
            }
        }
        result
    }
}

impl RunContent {
    /// Map a childless run element to its content, `None` for elements without text
    fn from_marker(local: &[u8], e: &BytesStart) -> Option<Self> {
        let content = match local {
            b"t" => RunContent::Text(String::new()),
            b"tab" | b"ptab" => RunContent::Tab,
            b"br" => RunContent::Break(BreakType::from_element(e)),
            b"cr" => RunContent::CarriageReturn,
            b"softHyphen" => RunContent::SoftHyphen,
            b"noBreakHyphen" => RunContent::NoBreakHyphen,
            _ => return None,
        };
        Some(content)
    }
}

/// Read the character data of a w:t element, whitespace untouched
fn read_text_content<R: BufRead>(reader: &mut Reader<R>) -> Result<String> {
    let mut text = String::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Text(e) => text.push_str(&e.unescape()?),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::Start(e) => skip_element(reader, &e)?,
            Event::End(e) => {
                if e.name().local_name().as_ref() == b"t" {
                    break;
                }
            }
            Event::Eof => return Err(unexpected_eof("w:t")),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::reader_from_str;

    fn parse_run(xml: &str) -> Run {
        let mut reader = reader_from_str(xml);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf).unwrap() {
                Event::Start(e) if e.name().local_name().as_ref() == b"r" => {
                    let e = e.into_owned();
                    return Run::from_reader(&mut reader, &e).unwrap();
                }
                Event::Eof => panic!("no run in {xml}"),
                _ => {}
            }
            buf.clear();
        }
    }

    #[test]
    fn test_text_whitespace_is_preserved() {
        let run = parse_run(r#"<w:r><w:t xml:space="preserve"> Jane  </w:t></w:r>"#);
        assert_eq!(run.text(), " Jane  ");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let run = parse_run(r#"<w:r><w:t>R&amp;D &lt;lead&gt;</w:t></w:r>"#);
        assert_eq!(run.text(), "R&D <lead>");
    }

    #[test]
    fn test_special_characters() {
        let run = parse_run(
            r#"<w:r>
                 <w:rPr><w:b/><w:rFonts w:ascii="Arial"></w:rFonts></w:rPr>
                 <w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t><w:cr/>
                 <w:t>d</w:t><w:noBreakHyphen/><w:softHyphen/><w:t>e</w:t>
                 <w:br w:type="page"/><w:ptab w:relativeTo="margin"/>
               </w:r>"#,
        );
        assert_eq!(run.text(), "a\tb\nc\nd-e\t");
        assert_eq!(run.content[3], RunContent::Break(BreakType::TextWrapping));
        assert!(run.content.contains(&RunContent::Break(BreakType::Page)));
    }

    #[test]
    fn test_non_text_children_are_skipped() {
        let run = parse_run(
            r#"<w:r><w:drawing><wp:inline><w:t>hidden</w:t></wp:inline></w:drawing><w:delText>gone</w:delText><w:instrText> PAGE </w:instrText><w:t>shown</w:t><w:t/></w:r>"#,
        );
        assert_eq!(run.text(), "shown");
        assert_eq!(run.content.len(), 2);
    }

    #[test]
    fn test_unclosed_run_fails() {
        let mut reader = reader_from_str("<w:r><w:t>Hi</w:t><w:tab/>");
        let mut buf = Vec::new();
        let start = match reader.read_event_into(&mut buf).unwrap() {
            Event::Start(e) => e.into_owned(),
            other => panic!("unexpected {other:?}"),
        };

        match Run::from_reader(&mut reader, &start) {
            Err(crate::Error::InvalidDocument(msg)) => assert_eq!(msg, "unexpected end of <w:r>"),
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }
}
