//! Content Types handling for OPC packages
//!
//! Parses `[Content_Types].xml`

use crate::error::{Error, Result};
use crate::opc::PartUri;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::BufRead;

/// Content types declared by an OPC package
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    /// Default extension mappings (lowercased extension -> content type)
    defaults: HashMap<String, String>,
    /// Override mappings (part URI -> content type)
    overrides: HashMap<PartUri, String>,
}

impl ContentTypes {
    /// Parse from XML string
    pub fn from_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        Self::from_reader(&mut reader)
    }

    /// Parse from a reader
    pub fn from_reader<R: BufRead>(reader: &mut Reader<R>) -> Result<Self> {
        let mut ct = Self::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Empty(e) | Event::Start(e) => match e.name().local_name().as_ref() {
                    b"Default" => {
                        let ext = required_attr(&e, "Extension")?;
                        let content_type = required_attr(&e, "ContentType")?;
                        ct.defaults.insert(ext.to_lowercase(), content_type);
                    }
                    b"Override" => {
                        let part_name = required_attr(&e, "PartName")?;
                        let content_type = required_attr(&e, "ContentType")?;
                        ct.overrides.insert(PartUri::new(&part_name)?, content_type);
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        Ok(ct)
    }

    /// Get the content type for a part
    pub fn get(&self, uri: &PartUri) -> Option<&str> {
        if let Some(ct) = self.overrides.get(uri) {
            return Some(ct);
        }

        uri.extension()
            .and_then(|ext| self.defaults.get(&ext))
            .map(|s| s.as_str())
    }
}

/// Get an attribute value, failing if it is absent
fn required_attr(element: &BytesStart, name: &str) -> Result<String> {
    crate::xml::get_attr(element, name).ok_or_else(|| Error::MissingAttribute {
        element: String::from_utf8_lossy(element.name().as_ref()).to_string(),
        attr: name.to_string(),
    })
}

/// Main document part of a `.docx`
pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
/// Main document part of a `.dotx` template
pub const TEMPLATE_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";
/// Main document part of a macro-enabled `.docm`
pub const MACRO_DOCUMENT: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";
/// Main document part of a macro-enabled `.dotm` template
pub const MACRO_TEMPLATE_DOCUMENT: &str =
    "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

/// Content types accepted as a WordprocessingML main document
pub const WORD_MAIN_DOCUMENTS: [&str; 4] = [
    MAIN_DOCUMENT,
    TEMPLATE_DOCUMENT,
    MACRO_DOCUMENT,
    MACRO_TEMPLATE_DOCUMENT,
];
