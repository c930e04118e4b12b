//! Embedded-metadata extraction via lopdf.
//!
//! Reads the trailer `Info` dictionary: `Title` for the document title,
//! `CreationDate` then `ModDate` for a publication year. Both operations
//! return `None` on any open or parse failure.

use lopdf::{Dictionary, Document, Object};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use tracing::debug;

use crate::domain::year::YearMatcher;

/// PDF date strings look like `D:YYYYMMDDHHmmSS...`; the year is the first
/// four digits after the marker.
static DATE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"D:(\d{4})").expect("valid date pattern"));

/// Date fields inspected for a year, in priority order.
const DATE_FIELDS: [&[u8]; 2] = [b"CreationDate", b"ModDate"];

/// Reads the embedded `Title` field, trimmed.
///
/// Returns `None` when the document cannot be parsed or the field is absent
/// or blank.
pub fn title_from_metadata(path: &Path) -> Option<String> {
    let doc = load(path)?;
    let info = info_dict(&doc)?;
    let title = string_value(&doc, info, b"Title")?;
    let title = title.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

/// Reads a publication year from the `CreationDate`/`ModDate` fields.
///
/// Returns the first in-range year found, `None` when the document cannot
/// be parsed or neither field carries one.
pub fn year_from_metadata(path: &Path) -> Option<String> {
    let doc = load(path)?;
    let info = info_dict(&doc)?;
    for field in DATE_FIELDS {
        let Some(value) = string_value(&doc, info, field) else {
            continue;
        };
        let Some(caps) = DATE_YEAR.captures(&value) else {
            continue;
        };
        let digits = &caps[1];
        if digits.parse::<i32>().is_ok_and(YearMatcher::in_range) {
            return Some(digits.to_string());
        }
    }
    None
}

fn load(path: &Path) -> Option<Document> {
    match Document::load(path) {
        Ok(doc) => Some(doc),
        Err(err) => {
            debug!(path = %path.display(), %err, "failed to parse PDF metadata");
            None
        }
    }
}

/// Resolves the trailer's `Info` dictionary, following one reference hop.
fn info_dict(doc: &Document) -> Option<&Dictionary> {
    match doc.trailer.get(b"Info").ok()? {
        Object::Dictionary(dict) => Some(dict),
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok(),
        _ => None,
    }
}

fn string_value(doc: &Document, dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        Object::Reference(id) => match doc.get_object(*id).ok()? {
            Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
            _ => None,
        },
        _ => None,
    }
}

/// PDF text strings are UTF-16BE when they carry a BOM, byte strings
/// otherwise.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
