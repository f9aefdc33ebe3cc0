//! # Umlstub Parser
//!
//! Reader and grammar for UMLet class diagrams. This crate turns a `.uxf`
//! document into class descriptors and parsed method signatures.
//!
//! ## Usage
//!
//! ```
//! # use umlstub_parser::{parse_class, read_document};
//! let source = r#"<diagram program="umlet">
//!   <element>
//!     <id>UMLClass</id>
//!     <panel_attributes>a.b.Widget
//! //desc:A widget
//! --
//! name
//! --
//! render(x: integer = 0):string</panel_attributes>
//!   </element>
//! </diagram>"#;
//!
//! let document = read_document(source, "UMLClass").unwrap();
//! let class = parse_class(&document.nodes()[0]).unwrap();
//!
//! assert_eq!(class.descriptor().package_path(), "a.b.Widget");
//! assert_eq!(class.methods()[0].name(), "render");
//! ```

pub mod error;

mod document;
mod node;
mod signature;
mod span;

pub use document::read_document;
pub use node::{ParsedNode, SECTION_SEPARATOR, Section, parse_node};
pub use signature::parse_signature;
pub use span::Span;

use log::debug;

use umlstub_core::semantic::{ClassDescriptor, MethodDescriptor};

use error::{Diagnostic, DiagnosticCollector};

/// A class node with its method signatures parsed.
#[derive(Debug, Clone)]
pub struct ParsedClass {
    descriptor: ClassDescriptor,
    methods: Vec<MethodDescriptor>,
    package_span: Span,
    diagnostics: Vec<Diagnostic>,
}

impl ParsedClass {
    /// Borrow the class descriptor.
    pub fn descriptor(&self) -> &ClassDescriptor {
        &self.descriptor
    }

    /// Borrow the methods that parsed successfully, in declaration order.
    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Span of the package path line in the node text.
    pub fn package_span(&self) -> Span {
        self.package_span
    }

    /// Grammar warnings and signature errors, with spans into the node text.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Parse one class-node label and every method signature in it.
///
/// This is the per-node entry point of the pipeline:
///
/// 1. **Grammar** - split the label into package path, directives,
///    attributes and raw method lines
/// 2. **Signatures** - parse each raw method line
///
/// A method line that fails to parse is reported in
/// [`ParsedClass::diagnostics`] and left out of [`ParsedClass::methods`];
/// its siblings are unaffected.
///
/// # Errors
///
/// Returns an error diagnostic only when the label has no package path.
pub fn parse_class(text: &str) -> Result<ParsedClass, Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    let (descriptor, package_span, method_spans) = node::parse_node_into(text, &mut collector)?;

    let mut methods = Vec::with_capacity(descriptor.raw_methods().len());
    for (line, span) in descriptor.raw_methods().iter().zip(&method_spans) {
        match parse_signature(line) {
            Ok(method) => methods.push(method),
            Err(diag) => collector.emit(diag.shifted(span.start())),
        }
    }

    debug!(
        package_path = descriptor.package_path(),
        methods = methods.len(),
        skipped = descriptor.raw_methods().len() - methods.len();
        "Parsed class"
    );

    Ok(ParsedClass {
        descriptor,
        methods,
        package_span,
        diagnostics: collector.finish(),
    })
}
