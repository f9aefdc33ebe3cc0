//! Parameter and return type vocabulary.
//!
//! Class diagrams name types with a small fixed vocabulary (either the long
//! form such as `integer` or the Python spelling such as `int`). Anything
//! outside the vocabulary is kept as a free-form token and emitted verbatim.

use std::fmt;

/// A parameter or return type.
///
/// # Examples
///
/// ```
/// use umlstub_core::datatype::DataType;
///
/// assert_eq!(DataType::from_token("integer"), DataType::Integer);
/// assert_eq!(DataType::from_token("int").to_string(), "int");
/// assert_eq!(DataType::from_token("Path").to_string(), "Path");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    Boolean,
    Mapping,
    Float,
    Integer,
    Sequence,
    String,
    /// A type outside the fixed vocabulary, kept verbatim.
    Other(std::string::String),
}

impl DataType {
    /// Classify a type token.
    ///
    /// Matching is exact and case-sensitive; unknown tokens become
    /// [`DataType::Other`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "boolean" | "bool" => Self::Boolean,
            "mapping" | "dict" => Self::Mapping,
            "floating-point" | "float" => Self::Float,
            "integer" | "int" => Self::Integer,
            "sequence" | "list" => Self::Sequence,
            "string" | "str" => Self::String,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the Python spelling of this type.
    pub fn python_name(&self) -> &str {
        match self {
            Self::Boolean => "bool",
            Self::Mapping => "dict",
            Self::Float => "float",
            Self::Integer => "int",
            Self::Sequence => "list",
            Self::String => "str",
            Self::Other(token) => token,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.python_name())
    }
}
