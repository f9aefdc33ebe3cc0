//! Outcome of a generation run.

use std::path::{Path, PathBuf};

use umlstub_parser::error::Diagnostic;

use crate::error::UmlStubError;

/// A stub file written for one class node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubFile {
    class_name: String,
    path: PathBuf,
    backup: Option<PathBuf>,
    markers: Vec<PathBuf>,
}

impl StubFile {
    pub(crate) fn new(
        class_name: impl Into<String>,
        path: PathBuf,
        backup: Option<PathBuf>,
        markers: Vec<PathBuf>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            path,
            backup,
            markers,
        }
    }

    /// Name of the generated class.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Path of the written stub.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the previous stub was moved, if one existed.
    pub fn backup(&self) -> Option<&Path> {
        self.backup.as_deref()
    }

    /// Namespace markers created for this stub. Markers that already
    /// existed are not listed.
    pub fn markers(&self) -> &[PathBuf] {
        &self.markers
    }
}

/// What happened to one class node.
#[derive(Debug)]
pub struct NodeReport {
    index: usize,
    source: String,
    diagnostics: Vec<Diagnostic>,
    outcome: Result<StubFile, UmlStubError>,
}

impl NodeReport {
    pub(crate) fn new(
        index: usize,
        source: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
        outcome: Result<StubFile, UmlStubError>,
    ) -> Self {
        Self {
            index,
            source: source.into(),
            diagnostics,
            outcome,
        }
    }

    /// Position of the node in the document, starting at 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node label that was parsed. Diagnostic spans point into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Grammar warnings and skipped-method errors. These never stop the node.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The written stub, or the error that stopped this node.
    pub fn outcome(&self) -> Result<&StubFile, &UmlStubError> {
        self.outcome.as_ref()
    }

    /// Returns `true` if a stub was written.
    pub fn is_written(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-node results of [`StubBuilder::generate`](crate::StubBuilder::generate),
/// in document order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    nodes: Vec<NodeReport>,
}

impl GenerationReport {
    pub(crate) fn push(&mut self, node: NodeReport) {
        self.nodes.push(node);
    }

    /// Borrow every node report.
    pub fn nodes(&self) -> &[NodeReport] {
        &self.nodes
    }

    /// Iterate over the stubs that were written.
    pub fn written(&self) -> impl Iterator<Item = &StubFile> {
        self.nodes.iter().filter_map(|node| node.outcome().ok())
    }

    /// Iterate over the nodes that were skipped.
    pub fn failed(&self) -> impl Iterator<Item = &NodeReport> {
        self.nodes.iter().filter(|node| !node.is_written())
    }

    /// Returns `true` if any node was skipped.
    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}
