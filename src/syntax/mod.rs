pub mod parser;
pub mod capture;
pub mod grammar;
pub mod doc_comments;
pub mod returns;
pub mod csharp;
pub mod languages;

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::AppConfig;
use crate::error::{CsDocError, Result};

use self::csharp::CSharpDocParser;
use self::doc_comments::DocMarkers;
use self::languages::{extension_of, is_supported_extension};
use self::parser::SyntaxParser;

// Re-export the result types for easier access
pub use self::parser::{DocumentedUnit, FileReport};

/// Checks if a directory entry is a VCS directory that should not be walked.
fn is_vcs_ignored(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().map(|s| s == ".git").unwrap_or(false)
}

fn has_configured_extension(path: &Path, config: &AppConfig) -> bool {
    extension_of(path)
        .map(|ext| config.extraction.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
        .unwrap_or(false)
}

/// Reads one file and extracts its documented declarations.
pub fn extract_file(path: &Path, config: &AppConfig) -> Result<FileReport> {
    let extension = extension_of(path).unwrap_or_default();
    if !is_supported_extension(&extension) {
        return Err(CsDocError::UnsupportedLanguage(format!(
            "{} (extension '{}')",
            path.display(),
            extension
        )));
    }

    let metadata = fs::metadata(path).map_err(|source| CsDocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let limit = config.extraction.max_file_size_bytes;
    if metadata.len() > limit {
        return Err(CsDocError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let code = fs::read_to_string(path).map_err(|source| CsDocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut parser = CSharpDocParser::with_markers(DocMarkers::from(&config.scan))?;
    parser.parse(&code, &path.to_string_lossy())
}

/// Expands `paths` into the sorted list of source files to extract.
///
/// Files given explicitly are kept as-is; directories are walked recursively,
/// skipping `.git` and keeping only files with a configured extension.
pub fn collect_source_files(paths: &[PathBuf], config: &AppConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        if !path.is_dir() {
            return Err(CsDocError::InvalidPath(format!(
                "{} does not exist",
                path.display()
            )));
        }

        for entry_result in WalkDir::new(path).into_iter().filter_entry(|e| !is_vcs_ignored(e)) {
            match entry_result {
                Ok(entry) => {
                    if !entry.file_type().is_file() || !has_configured_extension(entry.path(), config) {
                        continue;
                    }
                    let supported = extension_of(entry.path())
                        .map(|ext| is_supported_extension(&ext))
                        .unwrap_or(false);
                    if supported {
                        files.push(entry.into_path());
                    } else {
                        log::warn!(
                            "Skipping {}: configured extension has no grammar",
                            entry.path().display()
                        );
                    }
                }
                Err(err) => {
                    // Unreadable entries are logged and skipped.
                    log::error!(
                        "Error walking directory entry near '{}': {}",
                        err.path().unwrap_or(path.as_path()).display(),
                        err
                    );
                }
            }
        }
    }

    files.sort();
    files.dedup();
    log::debug!("Collected {} source files", files.len());
    Ok(files)
}

/// Extracts one file found by [`collect_source_files`].
///
/// Files named in `paths` fail the run; files found by walking a directory
/// are logged and skipped instead.
fn extract_collected(file: &Path, paths: &[PathBuf], config: &AppConfig) -> Option<Result<FileReport>> {
    match extract_file(file, config) {
        Ok(report) => Some(Ok(report)),
        Err(e) if paths.iter().any(|p| p == file) => Some(Err(e)),
        Err(e) => {
            log::warn!("Skipping {}: {}", file.display(), e);
            None
        }
    }
}

/// Extracts every file under `paths`, one parser per worker.
///
/// Reports come back ordered by file path.
pub fn extract_paths(paths: &[PathBuf], config: &AppConfig) -> Result<Vec<FileReport>> {
    let files = collect_source_files(paths, config)?;

    #[cfg(feature = "onetime_rayon")]
    let reports = {
        use rayon::prelude::*;
        files
            .par_iter()
            .filter_map(|file| extract_collected(file, paths, config))
            .collect::<Result<Vec<_>>>()?
    };

    #[cfg(not(feature = "onetime_rayon"))]
    let reports = files
        .iter()
        .filter_map(|file| extract_collected(file, paths, config))
        .collect::<Result<Vec<_>>>()?;

    if reports.len() < files.len() {
        log::info!("Extracted {} of {} files", reports.len(), files.len());
    }
    Ok(reports)
}

#[cfg(test)]
mod csharp_tests;
