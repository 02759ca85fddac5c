use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for csdoc operations
pub type Result<T> = std::result::Result<T, CsDocError>;

/// Errors that can occur while loading the grammar, parsing or extracting
#[derive(Error, Debug)]
pub enum CsDocError {
    #[error("Failed to load C# grammar: {0}")]
    Grammar(String),

    #[error("Invalid structural query: {0}")]
    Query(String),

    #[error("Parser error: {0}")]
    Parse(String),

    #[error("Capture range {start}..{end} does not fit a source of {len} bytes")]
    CaptureRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("File {path} is {size} bytes, exceeding the limit of {limit} bytes")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<tree_sitter::LanguageError> for CsDocError {
    fn from(err: tree_sitter::LanguageError) -> Self {
        CsDocError::Grammar(err.to_string())
    }
}

impl From<tree_sitter::QueryError> for CsDocError {
    fn from(err: tree_sitter::QueryError) -> Self {
        CsDocError::Query(err.to_string())
    }
}
