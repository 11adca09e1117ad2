//! Part URI handling for OPC packages

use crate::error::{Error, Result};
use std::fmt;

/// Represents a URI to a part within an OPC package.
///
/// Part URIs are always absolute paths starting with '/'.
/// Example: `/word/document.xml`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartUri {
    path: String,
}

impl PartUri {
    /// Create a new PartUri from a string.
    ///
    /// The path will be normalized (leading '/' ensured, no trailing '/',
    /// `.` and `..` segments resolved).
    pub fn new(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() {
            return Err(Error::InvalidPartUri("empty path".into()));
        }

        if path.contains("//") || path.contains('\\') {
            return Err(Error::InvalidPartUri(format!(
                "invalid path '{}': contains double slashes or backslashes",
                path
            )));
        }

        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    if segments.pop().is_none() {
                        return Err(Error::InvalidPartUri(format!(
                            "invalid path '{}': escapes the package root",
                            path
                        )));
                    }
                }
                s => segments.push(s),
            }
        }

        if segments.is_empty() {
            return Err(Error::InvalidPartUri(format!("invalid path '{}'", path)));
        }

        Ok(Self {
            path: format!("/{}", segments.join("/")),
        })
    }

    /// Get the path as a string slice
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Name of the entry inside the ZIP archive (no leading '/')
    pub fn zip_name(&self) -> &str {
        &self.path[1..]
    }

    /// Get the file extension, lowercased
    pub fn extension(&self) -> Option<String> {
        let file_name = self.path.rsplit('/').next()?;
        let (_, ext) = file_name.rsplit_once('.')?;
        (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(PartUri::new("word/document.xml").unwrap().as_str(), "/word/document.xml");
        assert_eq!(PartUri::new("/word/document.xml").unwrap().as_str(), "/word/document.xml");
        assert_eq!(PartUri::new("./word/./document.xml").unwrap().as_str(), "/word/document.xml");
        assert_eq!(
            PartUri::new("/word/sub/../document.xml").unwrap().as_str(),
            "/word/document.xml"
        );
    }

    #[test]
    fn test_invalid() {
        assert!(PartUri::new("").is_err());
        assert!(PartUri::new("/").is_err());
        assert!(PartUri::new("word//document.xml").is_err());
        assert!(PartUri::new("../document.xml").is_err());
    }

    #[test]
    fn test_zip_name_and_extension() {
        let uri = PartUri::new("/word/Document.XML").unwrap();
        assert_eq!(uri.zip_name(), "word/Document.XML");
        assert_eq!(uri.extension().as_deref(), Some("xml"));
        assert_eq!(PartUri::new("/word/noext").unwrap().extension(), None);
    }
}
