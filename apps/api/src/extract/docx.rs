//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the document body lives in
//! `word/document.xml`. Paragraph boundaries (`</w:p>`) become newlines so
//! section headers land on their own lines, then remaining markup is
//! stripped and basic XML entities unescaped.

use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static XML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("regex: xml tag"));

/// Extracts text from an in-memory DOCX document.
pub fn extract_text(data: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(data)).context("not a valid zip archive")?;
    let mut file = archive
        .by_name("word/document.xml")
        .context("word/document.xml missing from archive")?;

    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .context("document.xml is not valid UTF-8")?;

    Ok(strip_document_xml(&xml))
}

/// Converts WordprocessingML to plain text, one line per paragraph.
fn strip_document_xml(xml: &str) -> String {
    let with_breaks = xml.replace("</w:p>", "\n");
    let stripped = XML_TAG.replace_all(&with_breaks, "");
    unescape_entities(&stripped)
}

fn unescape_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
