use serde::Serialize;

use crate::error::Result;

/// A method or constructor together with the doc comment block found directly above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentedUnit {
    /// Doc lines and method source joined with `\n`.
    pub content: String,
    /// The trimmed doc comment lines, top to bottom.
    pub doc_lines: Vec<String>,
    /// The exact source text of the declaration node.
    pub body: String,
    /// The line the declaration starts on (1-based).
    pub start_line: usize,
    /// The line the declaration ends on (1-based, inclusive).
    pub end_line: usize,
}

/// Extraction result for a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// The path to the file the units were extracted from.
    pub file_path: String,
    /// Documented declarations, in capture order.
    pub units: Vec<DocumentedUnit>,
    /// Whether any `return` statement in the file carries a value.
    pub has_value_return: bool,
}

/// Trait for syntax-aware parsers.
/// Implementations own their parser state and may be used from one thread at a time.
pub trait SyntaxParser {
    /// Parses the given code string and extracts the documented declarations.
    ///
    /// # Arguments
    ///
    /// * `code` - The source code content as a string.
    /// * `file_path` - The path to the original file (used for context in the report).
    fn parse(&mut self, code: &str, file_path: &str) -> Result<FileReport>;
}
