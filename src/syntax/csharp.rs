use tree_sitter::Parser;

use crate::error::Result;
use crate::syntax::doc_comments::{find_documented_units_with, DocMarkers};
use crate::syntax::grammar::{grammar, make_parser, parse_source, run_query};
use crate::syntax::parser::{DocumentedUnit, FileReport, SyntaxParser};
use crate::syntax::returns::classify_in_tree;

/// Drops a leading UTF-8 byte order mark so offsets line up with the text parsed.
fn strip_bom(code: &str) -> &str {
    code.strip_prefix('\u{feff}').unwrap_or(code)
}

/// Extracts documented methods and constructors from C# source.
///
/// Each instance owns its parser; the grammar and queries are shared.
pub struct CSharpDocParser {
    parser: Parser,
    markers: DocMarkers,
}

impl CSharpDocParser {
    pub fn new() -> Result<Self> {
        Self::with_markers(DocMarkers::default())
    }

    pub fn with_markers(markers: DocMarkers) -> Result<Self> {
        Ok(CSharpDocParser {
            parser: make_parser()?,
            markers,
        })
    }

    /// Returns the documented declarations in `code`, in source order.
    pub fn documented_units(&mut self, code: &str) -> Result<Vec<DocumentedUnit>> {
        let code = strip_bom(code);
        let tree = parse_source(&mut self.parser, code)?;
        let captures = run_query(grammar()?.method_query(), tree.root_node(), code.as_bytes());
        find_documented_units_with(code, &captures, &self.markers)
    }

    /// Reports whether `code` contains a `return` statement with a value.
    pub fn has_value_return(&mut self, code: &str) -> Result<bool> {
        let code = strip_bom(code);
        let tree = parse_source(&mut self.parser, code)?;
        let returns = classify_in_tree(tree.root_node(), code)?;
        Ok(returns.iter().any(|r| r.has_value))
    }
}

impl SyntaxParser for CSharpDocParser {
    fn parse(&mut self, code: &str, file_path: &str) -> Result<FileReport> {
        let code = strip_bom(code);
        let tree = parse_source(&mut self.parser, code)?;
        let root_node = tree.root_node();
        if root_node.has_error() {
            log::warn!("Syntax errors in {}; extraction may be partial", file_path);
        }

        let captures = run_query(grammar()?.method_query(), root_node, code.as_bytes());
        let units = find_documented_units_with(code, &captures, &self.markers)?;
        let has_value_return = classify_in_tree(root_node, code)?
            .iter()
            .any(|r| r.has_value);

        log::debug!(
            "{}: {} declarations, {} documented",
            file_path,
            captures.len(),
            units.len()
        );

        Ok(FileReport {
            file_path: file_path.to_string(),
            units,
            has_value_return,
        })
    }
}
