//! # docx-lines
//!
//! Plain text extraction from DOCX files.
//!
//! ## Features
//!
//! - Reads the main document of a DOCX (or DOCM/DOTX/DOTM) package
//! - Paragraph text in document order, then table cell text row by row
//! - Merged table cells reported once per grid column they cover
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docx_lines::Document;
//!
//! let doc = Document::open("resume.docx")?;
//! for line in doc.lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), docx_lines::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod opc;
pub mod xml;

pub use document::{Document, Paragraph, Run, Table, TableCell, TableRow};
pub use error::{Error, Result};
pub use extract::{extract_lines, write_lines, Line, Lines, Origin};
pub use opc::{Package, Part, PartUri};
