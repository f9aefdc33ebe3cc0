//! Umlstub - Python class stubs from UMLet class diagrams.
//!
//! Reads a UMLet `.uxf` document, parses the mini-notation in the label of
//! every class node, and writes one Python stub per class into a package
//! tree derived from the class's dotted package path.
//!
//! # Pipeline
//!
//! ```text
//! .uxf document ──read──▶ DiagramDocument
//!                             │ per node
//!                             ▼
//!                  grammar + signatures ──▶ PathPlan ──▶ namespace markers
//!                                                          │
//!                                             render ──▶ write with backup
//! ```
//!
//! Document errors stop the run. Everything after reading is isolated per
//! node and recorded in a [`GenerationReport`].

pub mod config;
pub mod export;
pub mod package;
pub mod render;

mod error;
mod report;

pub use umlstub_core::{datatype, semantic};

pub use error::UmlStubError;
pub use report::{GenerationReport, NodeReport, StubFile};

use std::{collections::HashSet, fs, path::Path};

use log::{debug, error, info, warn};

use umlstub_core::package::{PathError, PathPlan};
use umlstub_parser::{
    ParsedClass, Span,
    error::{Diagnostic, ErrorCode},
};

use config::AppConfig;
use render::StubRenderer;
use semantic::DiagramDocument;

/// Builder for reading diagrams and generating stubs.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use umlstub::{StubBuilder, config::AppConfig};
///
/// let builder = StubBuilder::new(AppConfig::default());
///
/// // Read the diagram into its class-node labels
/// let document = builder.read(Path::new("model.uxf"))
///     .expect("Failed to read diagram");
///
/// // Write one stub per class node
/// let report = builder.generate(&document, Path::new("out"));
/// for stub in report.written() {
///     println!("{}", stub.path().display());
/// }
///
/// // Or use default config
/// let builder = StubBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct StubBuilder {
    config: AppConfig,
}

impl StubBuilder {
    /// Create a new stub builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Diagram, output and render settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Borrow the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Read a diagram document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`UmlStubError::NotFound`] if `path` does not exist,
    /// [`UmlStubError::Io`] if it cannot be read, and
    /// [`UmlStubError::Parse`] if it is not valid UTF-8 or not a
    /// well-formed document.
    pub fn read(&self, path: &Path) -> Result<DiagramDocument, UmlStubError> {
        if !path.exists() {
            return Err(UmlStubError::NotFound(path.to_path_buf()));
        }

        info!(path:? = path; "Reading diagram");
        let source = String::from_utf8(fs::read(path)?).map_err(|err| {
            let offset = err.utf8_error().valid_up_to();
            let span = Span::new(offset..offset + char::REPLACEMENT_CHARACTER.len_utf8());
            let diag = Diagnostic::error(format!("invalid UTF-8 at byte {offset}"))
                .with_code(ErrorCode::E001)
                .with_label(span, "not UTF-8")
                .with_help("save the diagram with UTF-8 encoding");
            UmlStubError::new_parse_error(diag, String::from_utf8_lossy(err.as_bytes()))
        })?;
        self.parse(&source)
    }

    /// Extract the class-node labels from diagram source text.
    ///
    /// # Arguments
    ///
    /// * `source` - UMLet document text
    ///
    /// # Errors
    ///
    /// Returns [`UmlStubError::Parse`] with the document as source if the
    /// markup is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use umlstub::StubBuilder;
    ///
    /// let source = "<diagram><element><id>UMLClass</id>\
    ///     <panel_attributes>a.b.Widget</panel_attributes></element></diagram>";
    ///
    /// let document = StubBuilder::default().parse(source).unwrap();
    /// assert_eq!(document.nodes(), ["a.b.Widget"]);
    /// ```
    pub fn parse(&self, source: &str) -> Result<DiagramDocument, UmlStubError> {
        let document = umlstub_parser::read_document(source, self.config.diagram().node_kind())
            .map_err(|err| UmlStubError::new_parse_error(err, source))?;

        debug!(nodes = document.len(); "Diagram parsed successfully");
        Ok(document)
    }

    /// Generate one stub per class node of `document` under `outdir`.
    ///
    /// Nodes are processed in document order and independently: a node that
    /// fails is recorded in the report and the rest still run.
    pub fn generate(&self, document: &DiagramDocument, outdir: &Path) -> GenerationReport {
        info!(outdir:? = outdir, nodes = document.len(); "Generating stubs");

        let mut report = GenerationReport::default();
        let mut targets = HashSet::new();

        for (index, text) in document.iter().enumerate() {
            let node = self.generate_node(index, text, outdir);

            if let Ok(stub) = node.outcome() {
                if !targets.insert(stub.path().to_path_buf()) {
                    warn!(
                        index,
                        path:? = stub.path();
                        "Stub file was already written in this run and has been replaced"
                    );
                }
            }
            report.push(node);
        }

        info!(
            written = report.written().count(),
            failed = report.failed().count();
            "Generation finished"
        );
        report
    }

    fn generate_node(&self, index: usize, text: &str, outdir: &Path) -> NodeReport {
        let parsed = match umlstub_parser::parse_class(text) {
            Ok(parsed) => parsed,
            Err(diag) => {
                error!(index, diagnostic:% = diag; "Skipping class node");
                let err = UmlStubError::new_parse_error(diag, text);
                return NodeReport::new(index, text, Vec::new(), Err(err));
            }
        };

        let diagnostics = parsed.diagnostics().to_vec();
        let outcome = self.write_class(&parsed, text, outdir);
        if let Err(err) = &outcome {
            error!(index, err:%; "Skipping class node");
        }

        NodeReport::new(index, text, diagnostics, outcome)
    }

    fn write_class(
        &self,
        parsed: &ParsedClass,
        text: &str,
        outdir: &Path,
    ) -> Result<StubFile, UmlStubError> {
        let class = parsed.descriptor();
        let plan = PathPlan::resolve(class.package_path()).map_err(|err| {
            UmlStubError::new_parse_error(path_diagnostic(&err, parsed.package_span()), text)
        })?;

        let output = self.config.output();
        let markers = package::ensure_package(outdir, &plan, output.namespace_marker())?;

        let stub = StubRenderer::new(self.config.render()).render(class, parsed.methods(), &plan);
        let path = outdir.join(plan.relative_file(output.extension()));
        let backup = export::write_with_backup(&path, &stub, output.backup_suffix())?;

        Ok(StubFile::new(plan.class_name(), path, backup, markers))
    }
}

/// Diagnostic for a package path that cannot be mapped onto the output tree.
fn path_diagnostic(err: &PathError, span: Span) -> Diagnostic {
    let (code, label) = match err {
        PathError::TooFewSegments { .. } => (ErrorCode::E300, "expected `package.module.Class`"),
        PathError::EmptySegment { .. } => (ErrorCode::E301, "empty segment"),
        PathError::InvalidSegment { .. } => (ErrorCode::E302, "segment is not a plain name"),
    };

    Diagnostic::error(err.to_string())
        .with_code(code)
        .with_label(span, label)
        .with_help("the first line of a class node is its dotted package path, e.g. `app.models.User`")
}
