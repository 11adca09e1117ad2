//! Print the paragraph and table text of a DOCX file, one line per entry

use docx_lines::{write_lines, Document, Result};
use std::io;

/// Document read by the tool, relative to the working directory
const DEFAULT_DOCUMENT: &str = "resume.docx";

fn main() -> Result<()> {
    env_logger::init();

    let doc = Document::open(DEFAULT_DOCUMENT)?;
    log::debug!(
        "{}: {} paragraph(s), {} table(s)",
        DEFAULT_DOCUMENT,
        doc.paragraph_count(),
        doc.table_count()
    );

    let written = write_lines(doc.lines(), io::stdout().lock())?;
    log::info!("wrote {} line(s) from {}", written, DEFAULT_DOCUMENT);

    Ok(())
}
