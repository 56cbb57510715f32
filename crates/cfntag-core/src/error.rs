//! # Error Hierarchy
//!
//! Structured error types for the reconciliation engine, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Every failure here is fatal to the run: the tool either rewrites a
//! template completely or refuses to touch it. Partial tagging is never an
//! outcome, so no variant is retryable.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the engine.
pub type TaggerResult<T> = Result<T, TaggerError>;

/// Errors raised while loading, mutating, or writing a template.
#[derive(Error, Debug)]
pub enum TaggerError {
    /// The template path does not exist or is not a readable file.
    #[error("template file not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The template could not be parsed as YAML.
    #[error("invalid YAML in {path}: {source}")]
    YamlParse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        source: serde_yaml::Error,
    },

    /// The mutated tree could not be re-serialized.
    #[error("failed to serialize template: {0}")]
    YamlEmit(#[from] serde_yaml::Error),

    /// I/O error while reading or writing the template file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
