//! Model file parsing.
//!
//! NeuroML model descriptions are XML documents. This module turns them into
//! an owned [`Element`] tree so the rest of the crate never touches the XML
//! library directly.
//!
//! # Tag naming
//!
//! Elements in a namespace keep it in their tag, in the `{uri}local` form:
//!
//! ```text
//! <neuroml xmlns="http://www.neuroml.org/schema/neuroml2">
//!   <population id="AVAL"/>      -> {http://www.neuroml.org/schema/neuroml2}population
//! </neuroml>
//! ```
//!
//! Extractors match tags by substring, so both forms are accepted.
//!
//! # Encoding
//!
//! Files are read as UTF-8. A file that is not valid UTF-8 is accepted only
//! when its XML declaration names ISO-8859-1 (Latin-1), which maps byte for
//! byte onto Unicode; any other encoding is a read error.

mod element;

pub use element::{Descendants, Element, Visitor};

use std::path::Path;

use crate::error::{NmlGraphError, Result, STRING_ORIGIN};

const LATIN1_LABELS: [&str; 4] = ["iso-8859-1", "iso_8859-1", "latin1", "latin-1"];

/// Parse a model document from a string.
pub fn parse(input: &str) -> Result<Element> {
    parse_source(input, STRING_ORIGIN)
}

/// Parse a model document from a file.
pub fn parse_file(path: &Path) -> Result<Element> {
    let read_error = |e| NmlGraphError::FileReadError {
        path: path.display().to_string(),
        source: e,
    };
    let bytes = std::fs::read(path).map_err(read_error)?;
    let content = decode(bytes).map_err(read_error)?;
    parse_source(&content, &path.display().to_string())
}

fn decode(bytes: Vec<u8>) -> std::io::Result<String> {
    let bytes = match String::from_utf8(bytes) {
        Ok(content) => return Ok(content),
        Err(e) => e.into_bytes(),
    };
    match declared_encoding(&bytes) {
        Some(label) if LATIN1_LABELS.contains(&label.as_str()) => {
            Ok(bytes.iter().map(|&b| char::from(b)).collect())
        }
        declared => Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "not valid UTF-8 (declared encoding: {})",
                declared.as_deref().unwrap_or("none")
            ),
        )),
    }
}

/// Lowercased `encoding` value of the XML declaration, if any.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let end = bytes.windows(2).position(|w| w == b"?>")?;
    let declaration = String::from_utf8_lossy(&bytes[..end]).to_ascii_lowercase();
    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    Some(value[..value.find(quote)?].to_string())
}

fn parse_source(input: &str, origin: &str) -> Result<Element> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let document =
        roxmltree::Document::parse_with_options(input, options).map_err(|e| NmlGraphError::ParseError {
            path: origin.to_string(),
            source: e,
        })?;
    Ok(Element::from_xml(document.root_element()))
}
