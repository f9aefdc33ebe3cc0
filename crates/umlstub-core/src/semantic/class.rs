//! Class descriptor for a single class node.

/// Description used when a class node carries no description directive.
pub const DESCRIPTION_PLACEHOLDER: &str = "INSERT CLASS DESCRIPTION HERE";

/// Structured content of one class node.
///
/// Built incrementally by the node grammar, one line at a time, and owned
/// exclusively by the processing of that node. Method lines are kept raw;
/// they are decomposed later by the signature parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    package_path: String,
    description: Option<String>,
    is_singleton: bool,
    inherits_from: Option<String>,
    imports: Vec<String>,
    attributes: Vec<String>,
    raw_methods: Vec<String>,
}

impl ClassDescriptor {
    /// Create a descriptor for the given dotted package path.
    pub fn new(package_path: impl Into<String>) -> Self {
        Self {
            package_path: package_path.into(),
            description: None,
            is_singleton: false,
            inherits_from: None,
            imports: Vec::new(),
            attributes: Vec::new(),
            raw_methods: Vec::new(),
        }
    }

    /// Get the dotted package path (e.g. `a.b.Widget`).
    pub fn package_path(&self) -> &str {
        &self.package_path
    }

    /// Get the class description, or [`DESCRIPTION_PLACEHOLDER`] when none was given.
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DESCRIPTION_PLACEHOLDER)
    }

    /// Returns `true` if the class is marked as a singleton.
    pub fn is_singleton(&self) -> bool {
        self.is_singleton
    }

    /// Get the dotted path of the base class, if any.
    pub fn inherits_from(&self) -> Option<&str> {
        self.inherits_from.as_deref()
    }

    /// Borrow the import lines in declaration order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    /// Borrow the attribute entries in declaration order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Borrow the unparsed method lines in declaration order.
    pub fn raw_methods(&self) -> &[String] {
        &self.raw_methods
    }

    /// Mark the class as a singleton.
    pub fn set_singleton(&mut self) {
        self.is_singleton = true;
    }

    /// Set the description. A later directive replaces an earlier one.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    /// Set the base class path. A later directive replaces an earlier one.
    pub fn set_inherits_from(&mut self, base: impl Into<String>) {
        self.inherits_from = Some(base.into());
    }

    /// Append an import line.
    pub fn push_import(&mut self, import: impl Into<String>) {
        self.imports.push(import.into());
    }

    /// Append an attribute entry.
    pub fn push_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.push(attribute.into());
    }

    /// Append a raw method line.
    pub fn push_raw_method(&mut self, line: impl Into<String>) {
        self.raw_methods.push(line.into());
    }

    /// Builder-style variant of [`set_singleton`](Self::set_singleton).
    pub fn with_singleton(mut self) -> Self {
        self.set_singleton();
        self
    }

    /// Builder-style variant of [`set_description`](Self::set_description).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Builder-style variant of [`set_inherits_from`](Self::set_inherits_from).
    pub fn with_inherits_from(mut self, base: impl Into<String>) -> Self {
        self.set_inherits_from(base);
        self
    }

    /// Builder-style variant of [`push_import`](Self::push_import).
    pub fn with_import(mut self, import: impl Into<String>) -> Self {
        self.push_import(import);
        self
    }

    /// Builder-style variant of [`push_attribute`](Self::push_attribute).
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.push_attribute(attribute);
        self
    }
}
