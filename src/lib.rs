#![warn(missing_docs)] // Enforce documentation for all public items

//! `csdoc` extracts documented methods and constructors from C# source.
//!
//! Parsing and structural matching are delegated to tree-sitter and its C#
//! grammar. On top of that the library provides:
//! - Doc comment attachment by scanning source lines above each declaration (`syntax::doc_comments`)
//! - Detection of `return` statements that carry a value (`syntax::returns`)
//! - File and directory extraction with one parser per worker (`syntax`)
//! - Configuration management (`config`)
//! - Error handling (`error`)
//!
//! The compiled grammar and queries are shared process-wide and read-only;
//! parser instances are never shared.

/// Configuration management for the application.
pub mod config;
/// Defines the core error types and Result alias.
pub mod error;
/// Code parsing and doc comment extraction for C#.
#[allow(missing_docs)]
pub mod syntax;
/// Command-line interface definitions and handlers.
#[cfg(feature = "cli")]
#[allow(missing_docs)]
pub mod cli;

pub use config::{load_config, save_config, AppConfig, ExtractionConfig, ScanConfig};
pub use error::{CsDocError, Result};
pub use syntax::capture::Capture;
pub use syntax::csharp::CSharpDocParser;
pub use syntax::doc_comments::{find_documented_units, DocMarkers};
pub use syntax::returns::{has_value_return, ReturnClassification};
pub use syntax::{extract_file, extract_paths, DocumentedUnit, FileReport};
