//! Error codes for the umlstub diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Document errors
//! - `E1xx` - Node grammar errors and warnings
//! - `E2xx` - Method signature errors
//! - `E3xx` - Package path errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Malformed markup.
    ///
    /// The diagram document is not well-formed XML.
    E001,

    /// Unexpected end of document.
    ///
    /// The document has no root element or ends with unclosed elements.
    E002,

    // =========================================================================
    // Node Grammar (E1xx)
    // =========================================================================
    /// Empty class node.
    ///
    /// The label of a class node has no non-blank line, so there is no
    /// package path.
    E100,

    /// Unrecognized line.
    ///
    /// A line appeared before the first section separator that is neither
    /// the package path nor a directive.
    E101,

    /// Empty directive value.
    ///
    /// A `//desc:` or `//inherits:` directive has nothing after the marker.
    E102,

    // =========================================================================
    // Method Signatures (E2xx)
    // =========================================================================
    /// Missing opening parenthesis.
    E200,

    /// Missing closing parenthesis.
    ///
    /// No `)` follows the first `(` of the signature.
    E201,

    /// Missing method name.
    E202,

    /// Parameter without separator.
    ///
    /// A parameter segment has neither a `:` type separator nor a `=`
    /// default separator.
    E203,

    /// Missing parameter name.
    E204,

    // =========================================================================
    // Package Paths (E3xx)
    // =========================================================================
    /// Too few package path segments.
    ///
    /// A package path needs at least a file stem and a class name.
    E300,

    /// Empty package path segment.
    E301,

    /// Invalid package path segment.
    ///
    /// A segment holds a path separator or is not a plain name (e.g. `/tmp/a`),
    /// so it would not stay under the output directory.
    E302,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed markup",
            ErrorCode::E002 => "unexpected end of document",
            ErrorCode::E100 => "empty class node",
            ErrorCode::E101 => "unrecognized line",
            ErrorCode::E102 => "empty directive value",
            ErrorCode::E200 => "missing opening parenthesis",
            ErrorCode::E201 => "missing closing parenthesis",
            ErrorCode::E202 => "missing method name",
            ErrorCode::E203 => "parameter without separator",
            ErrorCode::E204 => "missing parameter name",
            ErrorCode::E300 => "too few package path segments",
            ErrorCode::E301 => "empty package path segment",
            ErrorCode::E302 => "invalid package path segment",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E203.to_string(), "E203");
        assert_eq!(ErrorCode::E300.to_string(), "E300");
        assert_eq!(ErrorCode::E302.to_string(), "E302");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "malformed markup");
        assert_eq!(ErrorCode::E101.description(), "unrecognized line");
        assert_eq!(
            ErrorCode::E203.description(),
            "parameter without separator"
        );
        assert_eq!(
            ErrorCode::E302.description(),
            "invalid package path segment"
        );
    }
}
