//! Attaches `///` doc comment blocks to the declarations directly below them.
//!
//! Attachment is decided by scanning source lines upward from each
//! declaration rather than by looking at sibling nodes. Blank lines and
//! attribute lines are stepped over; any other line ends the block.

use crate::config::ScanConfig;
use crate::error::Result;
use crate::syntax::capture::Capture;
use crate::syntax::grammar::capture_text;
use crate::syntax::parser::DocumentedUnit;

/// Leading tokens that classify a trimmed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMarkers {
    pub doc_comment: String,
    pub attribute: String,
}

impl Default for DocMarkers {
    fn default() -> Self {
        ScanConfig::default().into()
    }
}

impl From<ScanConfig> for DocMarkers {
    fn from(config: ScanConfig) -> Self {
        Self {
            doc_comment: config.doc_comment_marker,
            attribute: config.attribute_marker,
        }
    }
}

impl From<&ScanConfig> for DocMarkers {
    fn from(config: &ScanConfig) -> Self {
        config.clone().into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Part of the doc block; collected.
    DocComment,
    /// An attribute such as `[Obsolete]`; stepped over.
    Attribute,
    /// Whitespace only; stepped over.
    Blank,
    /// Anything else; ends the scan.
    Other,
}

/// Strips surrounding whitespace and a byte order mark.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Classifies one source line after trimming surrounding whitespace.
///
/// The doc marker is tested first, then the attribute marker, then blankness.
pub fn classify_line(line: &str, markers: &DocMarkers) -> LineKind {
    let trimmed = trim_line(line);
    if trimmed.starts_with(markers.doc_comment.as_str()) {
        LineKind::DocComment
    } else if trimmed.starts_with(markers.attribute.as_str()) {
        LineKind::Attribute
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Other
    }
}

/// Collects the doc lines found above `start_line` (0-based), top to bottom.
///
/// Lines are returned trimmed. A declaration on the first line has nothing
/// above it and yields an empty list.
pub fn scan_doc_lines<'a>(lines: &[&'a str], start_line: usize, markers: &DocMarkers) -> Vec<&'a str> {
    let mut doc_lines = Vec::new();
    let above = start_line.min(lines.len());

    for &line in lines[..above].iter().rev() {
        match classify_line(line, markers) {
            LineKind::DocComment => doc_lines.push(trim_line(line)),
            LineKind::Attribute | LineKind::Blank => continue,
            LineKind::Other => break,
        }
    }

    doc_lines.reverse();
    doc_lines
}

/// Finds the documented units among `captures` using the default markers.
pub fn find_documented_units(source: &str, captures: &[Capture]) -> Result<Vec<DocumentedUnit>> {
    find_documented_units_with(source, captures, &DocMarkers::default())
}

/// Finds the documented units among `captures`.
///
/// Only captures tagged `method` are considered and only those with at
/// least one doc line above them produce a unit. Output follows capture
/// order. Each capture is scanned on its own, so one doc block may be
/// attached to more than one declaration.
///
/// `source` must be the text the captures were produced from.
pub fn find_documented_units_with(
    source: &str,
    captures: &[Capture],
    markers: &DocMarkers,
) -> Result<Vec<DocumentedUnit>> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut units = Vec::new();

    for capture in captures.iter().filter(|c| c.is_method()) {
        let body = capture_text(source, capture)?;
        let doc_lines = scan_doc_lines(&lines, capture.start_line, markers);
        if doc_lines.is_empty() {
            log::trace!("No doc comment above declaration at line {}", capture.start_line + 1);
            continue;
        }

        let mut parts = doc_lines.clone();
        parts.push(body);
        let body_lines = body.split('\n').count();

        units.push(DocumentedUnit {
            content: parts.join("\n"),
            doc_lines: doc_lines.iter().map(|l| l.to_string()).collect(),
            body: body.to_string(),
            start_line: capture.start_line + 1,
            end_line: capture.start_line + body_lines,
        });
    }

    log::debug!(
        "Attached doc comments to {} of {} captures",
        units.len(),
        captures.len()
    );
    Ok(units)
}
