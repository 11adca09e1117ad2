//! Part representation for OPC packages

use crate::opc::PartUri;

/// A part read out of an OPC package
#[derive(Clone, Debug)]
pub struct Part {
    /// Part URI
    uri: PartUri,
    /// Content type declared in `[Content_Types].xml`
    content_type: Option<String>,
    /// Decompressed part data
    data: Vec<u8>,
}

impl Part {
    /// Create a new part
    pub fn new(uri: PartUri, content_type: Option<String>, data: Vec<u8>) -> Self {
        Self {
            uri,
            content_type,
            data,
        }
    }

    /// Get the part URI
    pub fn uri(&self) -> &PartUri {
        &self.uri
    }

    /// Get the declared content type, if any
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Get the raw data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get data as UTF-8 string (a leading byte order mark is dropped)
    pub fn data_as_str(&self) -> Result<&str, std::str::Utf8Error> {
        let data = self.data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&self.data[..]);
        std::str::from_utf8(data)
    }
}
