//! Process-wide C# grammar and compiled queries.
//!
//! The grammar and both queries are compiled once and only ever read
//! afterwards. Parsers are not shared: every caller gets its own from
//! [`make_parser`], so concurrent parses never touch each other's state.

use lazy_static::lazy_static;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor, Tree};

use crate::error::{CsDocError, Result};
use crate::syntax::capture::Capture;

const METHOD_QUERY: &str = r#"
(method_declaration) @method
(constructor_declaration) @method
"#;

const RETURN_QUERY: &str = r#"
(return_statement) @return
"#;

/// The C# language plus the structural queries run against its trees.
pub struct CSharpGrammar {
    language: Language,
    method_query: Query,
    return_query: Query,
}

impl CSharpGrammar {
    fn load() -> Result<Self> {
        let language = tree_sitter_c_sharp::language();
        let method_query = Query::new(&language, METHOD_QUERY)?;
        let return_query = Query::new(&language, RETURN_QUERY)?;
        log::debug!(
            "Compiled C# queries ({} method patterns, {} return patterns)",
            method_query.pattern_count(),
            return_query.pattern_count()
        );
        Ok(Self {
            language,
            method_query,
            return_query,
        })
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    /// Matches method and constructor declarations, both tagged `method`.
    pub fn method_query(&self) -> &Query {
        &self.method_query
    }

    /// Matches every `return` statement, tagged `return`.
    pub fn return_query(&self) -> &Query {
        &self.return_query
    }
}

lazy_static! {
    static ref GRAMMAR: std::result::Result<CSharpGrammar, String> =
        CSharpGrammar::load().map_err(|e| e.to_string());
}

/// Returns the shared grammar, compiling it on first use.
pub fn grammar() -> Result<&'static CSharpGrammar> {
    GRAMMAR
        .as_ref()
        .map_err(|e| CsDocError::Grammar(e.clone()))
}

/// Creates a parser owned by the caller and bound to the shared language.
pub fn make_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser.set_language(grammar()?.language())?;
    Ok(parser)
}

/// Parses `text` into a syntax tree.
pub fn parse_source(parser: &mut Parser, text: &str) -> Result<Tree> {
    parser
        .parse(text, None)
        .ok_or_else(|| CsDocError::Parse("tree-sitter returned no tree for C# source".to_string()))
}

/// Runs `query` under `root` and snapshots every capture in engine order.
pub fn run_query(query: &Query, root: Node, text: &[u8]) -> Vec<Capture> {
    let names = query.capture_names();
    let mut cursor = QueryCursor::new();
    cursor
        .captures(query, root, text)
        .map(|(query_match, index)| {
            let capture = query_match.captures[index];
            Capture::from_node(capture.node, names[capture.index as usize])
        })
        .collect()
}

/// Returns the exact source text spanned by `capture`.
pub fn capture_text<'a>(source: &'a str, capture: &Capture) -> Result<&'a str> {
    source
        .get(capture.start_byte..capture.end_byte)
        .ok_or(CsDocError::CaptureRange {
            start: capture.start_byte,
            end: capture.end_byte,
            len: source.len(),
        })
}
