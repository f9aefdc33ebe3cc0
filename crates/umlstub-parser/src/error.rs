//! Error and diagnostic system for the umlstub parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the node or document text
//! - Severity levels (grammar warnings are non-fatal)
//! - Diagnostic collector for accumulating per-node findings
//!
//! # Overview
//!
//! A [`Diagnostic`] is a single error or warning with an optional error
//! code, source locations, and help text. Fatal document-level failures are
//! wrapped in [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use umlstub_parser::error::{Diagnostic, ErrorCode};
//! # use umlstub_parser::Span;
//!
//! let diag = Diagnostic::error("parameter `x y` has neither `:` nor `=`")
//!     .with_code(ErrorCode::E203)
//!     .with_label(Span::new(4..7), "expected `name: type = default`")
//!     .with_help("separate the name from its type with `:`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
