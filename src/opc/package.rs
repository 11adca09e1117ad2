//! OPC Package implementation
//!
//! Reads DOCX files as ZIP packages. Parts are decompressed on demand.

use crate::error::{Error, Result};
use crate::opc::relationships::rel_types;
use crate::opc::{ContentTypes, Part, PartUri, Relationships};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;
use zip::read::ZipArchive;

const CONTENT_TYPES_NAME: &str = "[Content_Types].xml";
const PACKAGE_RELS_NAME: &str = "_rels/.rels";

/// Upper bound on the buffer reserved from an entry's declared size
const MAX_PREALLOCATION: u64 = 1 << 20;

/// An OPC package (ZIP-based container for DOCX, XLSX, PPTX, etc.)
#[derive(Debug)]
pub struct Package<R> {
    /// Underlying ZIP archive
    archive: ZipArchive<R>,
    /// Package-level relationships (/_rels/.rels)
    relationships: Relationships,
    /// Content types ([Content_Types].xml)
    content_types: ContentTypes,
}

impl Package<BufReader<File>> {
    /// Open a package from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("opening package {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<'a> Package<Cursor<&'a [u8]>> {
    /// Open a package from bytes
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(bytes))
    }
}

impl<R: Read + Seek> Package<R> {
    /// Open a package from a reader
    pub fn from_reader(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        log::debug!("package has {} entries", archive.len());

        let content_types = match read_entry_string(&mut archive, CONTENT_TYPES_NAME)? {
            Some(xml) => ContentTypes::from_xml(&xml)?,
            None => return Err(Error::MissingPart(CONTENT_TYPES_NAME.into())),
        };

        let relationships = match read_entry_string(&mut archive, PACKAGE_RELS_NAME)? {
            Some(xml) => Relationships::from_xml(&xml)?,
            None => Relationships::default(),
        };

        Ok(Self {
            archive,
            relationships,
            content_types,
        })
    }

    /// Get package-level relationships
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Get content types
    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Read a part by URI
    pub fn read_part(&mut self, uri: &PartUri) -> Result<Part> {
        let data = read_entry(&mut self.archive, uri.zip_name())?
            .ok_or_else(|| Error::MissingPart(uri.to_string()))?;
        let content_type = self.content_types.get(uri).map(str::to_string);
        log::debug!(
            "read part {} ({} bytes, {})",
            uri,
            data.len(),
            content_type.as_deref().unwrap_or("no content type")
        );

        Ok(Part::new(uri.clone(), content_type, data))
    }

    /// URI of the main document part, from the officeDocument relationship
    pub fn main_document_uri(&self) -> Result<PartUri> {
        let rel = self
            .relationships
            .by_type(&[rel_types::OFFICE_DOCUMENT, rel_types::STRICT_OFFICE_DOCUMENT])
            .ok_or_else(|| Error::MissingPart("officeDocument relationship".into()))?;

        // Package relationships are relative to the package root
        PartUri::new(&rel.target)
    }

    /// Read the main document part
    pub fn main_document_part(&mut self) -> Result<Part> {
        let uri = self.main_document_uri()?;
        self.read_part(&uri)
    }
}

/// Read a ZIP entry, `None` if the archive has no such entry
fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<Vec<u8>>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    // The declared size comes from the archive and is not trusted
    let mut data = Vec::with_capacity(file.size().min(MAX_PREALLOCATION) as usize);
    file.read_to_end(&mut data)?;
    Ok(Some(data))
}

fn read_entry_string<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Option<String>> {
    match read_entry(archive, name)? {
        Some(data) => {
            let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&data[..]);
            Ok(Some(std::str::from_utf8(data)?.to_string()))
        }
        None => Ok(None),
    }
}
