//! Helpers to build DOCX packages in memory

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

/// A minimal DOCX builder: content types, package rels and document.xml
pub struct DocxBuilder {
    body: String,
    content_type: String,
    target: String,
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            content_type: MAIN_DOCUMENT.to_string(),
            target: "word/document.xml".to_string(),
        }
    }

    pub fn paragraph(mut self, text: &str) -> Self {
        self.body.push_str(&paragraph_xml(text));
        self
    }

    pub fn table(mut self, rows: &[&[&str]]) -> Self {
        self.body.push_str("<w:tbl><w:tblPr><w:tblStyle w:val=\"TableGrid\"/></w:tblPr>");
        for row in rows {
            self.body.push_str("<w:tr>");
            for text in row.iter() {
                self.body.push_str("<w:tc>");
                self.body.push_str(&paragraph_xml(text));
                self.body.push_str("</w:tc>");
            }
            self.body.push_str("</w:tr>");
        }
        self.body.push_str("</w:tbl>");
        self
    }

    pub fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub fn target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let part_name = format!("/{}", self.target.trim_start_matches('/'));
        let content_types = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="{part_name}" ContentType="{}"/></Types>"#,
            self.content_type
        );
        let rels = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="{}"/></Relationships>"#,
            self.target
        );
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            self.body
        );

        zip_package(&[
            ("[Content_Types].xml", content_types.as_str()),
            ("_rels/.rels", rels.as_str()),
            (part_name.trim_start_matches('/'), document.as_str()),
        ])
    }
}

pub fn paragraph_xml(text: &str) -> String {
    if text.is_empty() {
        "<w:p/>".to_string()
    } else {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{text}</w:t></w:r></w:p>"#)
    }
}

/// Zip the given (name, content) entries
pub fn zip_package(entries: &[(&str, &str)]) -> Vec<u8> {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}
