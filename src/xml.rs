//! Small helpers shared by the streaming XML parsers

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Get an attribute value by its local name, ignoring the namespace prefix.
///
/// `w:val`, `val` and `x:val` all match `"val"`.
pub fn get_attr(element: &BytesStart, local: &str) -> Option<String> {
    element
        .attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == local.as_bytes())
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

/// Helper to get w:val attribute (common in OOXML)
pub fn get_w_val(element: &BytesStart) -> Option<String> {
    get_attr(element, "val")
}

/// Create a reader over an XML part without trimming text.
///
/// Whitespace inside `w:t` is significant, so only the parsers decide what to drop.
pub fn reader_from_str(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);
    reader
}

/// Error for input that ends before `element` is closed.
///
/// The reader does not check for unclosed tags at end of input, so every
/// element parser reports it itself.
pub fn unexpected_eof(element: &str) -> Error {
    Error::InvalidDocument(format!("unexpected end of <{}>", element))
}

/// Skip an element and all its children (the start tag has already been read)
pub fn skip_element<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart) -> Result<()> {
    let target = start.name().as_ref().to_vec();
    let mut depth = 1;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == target => depth += 1,
            Event::End(e) if e.name().as_ref() == target => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Event::Eof => return Err(unexpected_eof(&String::from_utf8_lossy(&target))),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
