use serde::Serialize;
use tree_sitter::Node;

use crate::error::Result;
use crate::syntax::capture::Capture;
use crate::syntax::grammar::{grammar, make_parser, parse_source, run_query};

/// Whether one `return` statement carries a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReturnClassification {
    /// Line of the `return` keyword (1-based).
    pub line: usize,
    pub has_value: bool,
}

impl From<&Capture> for ReturnClassification {
    fn from(capture: &Capture) -> Self {
        Self {
            line: capture.start_line + 1,
            has_value: capture.structural_children > 1,
        }
    }
}

/// Classifies every `return` statement under `root`, in source order.
pub fn classify_in_tree(root: Node, source: &str) -> Result<Vec<ReturnClassification>> {
    let captures = run_query(grammar()?.return_query(), root, source.as_bytes());
    Ok(captures.iter().map(ReturnClassification::from).collect())
}

/// Parses `source` and classifies every `return` statement in it.
pub fn classify_returns(source: &str) -> Result<Vec<ReturnClassification>> {
    let mut parser = make_parser()?;
    let tree = parse_source(&mut parser, source)?;
    classify_in_tree(tree.root_node(), source)
}

/// Reports whether `source` contains a `return` statement with a value.
///
/// No return statements at all is not an error; it yields `false`.
pub fn has_value_return(source: &str) -> Result<bool> {
    let found = classify_returns(source)?.iter().any(|r| r.has_value);
    log::debug!("Value return present: {}", found);
    Ok(found)
}
