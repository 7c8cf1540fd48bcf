// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Source documents loaded from application content.
//!
//! [`load_source`] locates a file through a [`ResourceResolver`], classifies
//! it by extension and reads it line by line. Legacy `.htm` page names fall
//! back to the matching `.jsp` resource.

use std::io::{self, Read};

use serde::Serialize;

use crate::error::{PageKitError, Result};
use crate::highlight::render_line;
use crate::resolver::ResourceResolver;

/// The detected source type of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Classification {
    /// `.java` sources: escaped, no keyword coloring.
    Java,
    /// `.xml` sources: XML tag coloring.
    Xml,
    /// `.htm`, `.html`, `.vm` and `.jsp` sources: tag, directive and `$` coloring.
    HtmlFamily,
    /// Anything else: escaped only.
    Plain,
}

impl Classification {
    /// Classifies a file name by its extension.
    pub fn from_filename(name: &str) -> Self {
        if name.ends_with(".java") {
            Self::Java
        } else if name.ends_with(".xml") {
            Self::Xml
        } else if [".htm", ".html", ".vm", ".jsp"]
            .iter()
            .any(|ext| name.ends_with(ext))
        {
            Self::HtmlFamily
        } else {
            Self::Plain
        }
    }

    /// Returns true for HTML-family documents.
    pub fn is_html_family(self) -> bool {
        self == Self::HtmlFamily
    }
}

/// A loaded source file.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// The file name as requested.
    pub name: String,
    /// The content path the document was actually read from.
    pub resource_path: String,
    /// The classification derived from `name`.
    pub classification: Classification,
    /// The text lines, without terminators.
    pub lines: Vec<String>,
}

impl SourceDocument {
    /// Renders every line as highlighted HTML, each followed by `\n`.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        for line in &self.lines {
            buffer.push_str(&render_line(line, self.classification));
            buffer.push('\n');
        }
        buffer
    }
}

/// Ensures a content path starts with `/`.
pub fn resource_path(filename: &str) -> String {
    if filename.starts_with('/') {
        filename.to_string()
    } else {
        format!("/{}", filename)
    }
}

/// Loads a source document by file name.
///
/// The name is looked up with a leading `/`. When nothing exists under it
/// and the requested name ends in `.htm`, the same path with a `.jsp`
/// extension is tried. The classification always follows the requested name.
///
/// # Errors
///
/// - [`PageKitError::NotFound`] naming the last candidate path tried
/// - [`PageKitError::Io`] when the resource cannot be read
pub fn load_source(resolver: &dyn ResourceResolver, filename: &str) -> Result<SourceDocument> {
    let mut path = resource_path(filename);
    let mut reader = resolver.open(&path)?;

    if reader.is_none() {
        if let Some(stem) = filename.strip_suffix(".htm") {
            path = format!("{}.jsp", resource_path(stem));
            tracing::debug!("{} not found, falling back to {}", filename, path);
            reader = resolver.open(&path)?;
        }
    }

    let Some(reader) = reader else {
        return Err(PageKitError::NotFound(path));
    };

    let lines = read_lines(reader).map_err(|e| PageKitError::io(&path, e))?;

    Ok(SourceDocument {
        name: filename.to_string(),
        resource_path: path,
        classification: Classification::from_filename(filename),
        lines,
    })
}

/// Reads `reader` into lines terminated by `\n`, `\r\n` or a lone `\r`.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
fn read_lines<R: Read>(mut reader: R) -> io::Result<Vec<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(String::from_utf8_lossy(&bytes[start..i]).into_owned());
                start = i + 1;
            }
            b'\r' => {
                lines.push(String::from_utf8_lossy(&bytes[start..i]).into_owned());
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(String::from_utf8_lossy(&bytes[start..]).into_owned());
    }
    Ok(lines)
}
