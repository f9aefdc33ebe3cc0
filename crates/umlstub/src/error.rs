//! Error types for umlstub operations.
//!
//! This module provides the main error type [`UmlStubError`] which wraps
//! the conditions that can stop a run or a single class node.

use std::{io, path::PathBuf};

use thiserror::Error;

use umlstub_parser::error::ParseError;

/// The main error type for umlstub operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries structured diagnostics together with the
/// text their spans point into: the whole document for document errors, the
/// node label for node errors.
#[derive(Debug, Error)]
pub enum UmlStubError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("input file `{}` does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl UmlStubError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: impl Into<ParseError>, src: impl Into<String>) -> Self {
        Self::Parse {
            err: err.into(),
            src: src.into(),
        }
    }
}
