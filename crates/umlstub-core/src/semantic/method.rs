//! Method and parameter descriptors.

use std::fmt;

use crate::datatype::DataType;

/// One parameter of a method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    name: String,
    datatype: Option<DataType>,
    default: Option<String>,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, datatype: Option<DataType>, default: Option<String>) -> Self {
        Self {
            name: name.into(),
            datatype,
            default,
        }
    }

    /// Get the parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the declared type, if any.
    pub fn datatype(&self) -> Option<&DataType> {
        self.datatype.as_ref()
    }

    /// Get the default value literal, if any.
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Returns `true` if this parameter names an input file that the stub
    /// should validate before use.
    ///
    /// Names containing `file` qualify, except those containing `outfile`.
    pub fn is_input_file(&self) -> bool {
        self.name.contains("file") && !self.name.contains("outfile")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(datatype) = &self.datatype {
            write!(f, ": {datatype}")?;
        }
        write!(f, " = {}", self.default.as_deref().unwrap_or("None"))
    }
}

/// A parsed method signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    name: String,
    parameters: Vec<Parameter>,
    return_type: Option<DataType>,
}

impl MethodDescriptor {
    /// Create a new method descriptor. A `None` return type means the
    /// method returns no value.
    pub fn new(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: Option<DataType>,
    ) -> Self {
        Self {
            name: name.into(),
            parameters,
            return_type,
        }
    }

    /// Get the method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Get the return type, or `None` when the method returns no value.
    pub fn return_type(&self) -> Option<&DataType> {
        self.return_type.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_input_file() {
        let cases = [
            ("infile", true),
            ("config_file", true),
            ("filename", true),
            ("outfile", false),
            ("my_outfile_path", false),
            ("path", false),
        ];

        for (name, expected) in cases {
            let param = Parameter::new(name, None, None);
            assert_eq!(param.is_input_file(), expected, "parameter `{name}`");
        }
    }

    #[test]
    fn test_parameter_display() {
        let typed = Parameter::new("x", Some(DataType::Integer), Some("0".to_string()));
        assert_eq!(typed.to_string(), "x: int = 0");

        let untyped = Parameter::new("verbose", None, Some("False".to_string()));
        assert_eq!(untyped.to_string(), "verbose = False");

        let no_default = Parameter::new("infile", Some(DataType::String), None);
        assert_eq!(no_default.to_string(), "infile: str = None");
    }

    #[test]
    fn test_method_without_return_type() {
        let method = MethodDescriptor::new("run", Vec::new(), None);

        assert_eq!(method.name(), "run");
        assert!(method.parameters().is_empty());
        assert!(method.return_type().is_none());
    }
}
