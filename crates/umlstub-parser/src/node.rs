//! Grammar for the label of a single class node.
//!
//! ```text
//! app.models.User                 <- package path (first non-blank line)
//! //desc:A registered user        <- directives, allowed anywhere
//! //inherits:app.models.base.Base
//! //singleton
//! //import os
//! //from typing import Optional
//! --                              <- enter attribute section
//! name
//! email: str
//! --                              <- enter method section
//! greet(other: str = None) -> str
//! ```
//!
//! Each line is trimmed and classified in a fixed priority order: package
//! path, directive table, section separator, then the current section.

use log::{debug, trace};

use umlstub_core::semantic::ClassDescriptor;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    span::Span,
};

/// Line that moves the grammar to the next section.
pub const SECTION_SEPARATOR: &str = "--";

/// Method lines this short (in characters, after trimming) are noise.
const METHOD_NOISE_LEN: usize = 5;

/// The section of a node label the grammar is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Before the first separator: only the package path and directives.
    #[default]
    None,
    Attributes,
    Methods,
}

impl Section {
    /// The section entered when a separator line is seen.
    ///
    /// A third separator returns to the attribute section.
    pub fn on_separator(self) -> Self {
        match self {
            Section::None => Section::Attributes,
            Section::Attributes => Section::Methods,
            Section::Methods => Section::Attributes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Singleton,
    Description,
    Inherits,
    Import,
}

#[derive(Debug, Clone, Copy)]
enum Marker {
    Exact(&'static str),
    Prefix(&'static str),
}

/// Directive markers in priority order; the first match wins.
const DIRECTIVES: &[(Directive, Marker)] = &[
    (Directive::Singleton, Marker::Exact("//singleton")),
    (Directive::Description, Marker::Prefix("//desc:")),
    (Directive::Inherits, Marker::Prefix("//inherits:")),
    (Directive::Import, Marker::Prefix("//import ")),
    (Directive::Import, Marker::Prefix("//from ")),
];

/// Comment marker stripped from import directives.
const IMPORT_MARKER: &str = "//";

/// Match a trimmed line against the directive table.
///
/// Returns the directive and its value: the remainder after the marker for
/// descriptions and base classes, the line without the leading `//` for
/// imports, and an empty string for the singleton flag.
fn match_directive(line: &str) -> Option<(Directive, &str)> {
    DIRECTIVES
        .iter()
        .find_map(|&(directive, marker)| match marker {
            Marker::Exact(text) => (line == text).then_some((directive, "")),
            Marker::Prefix(prefix) => line.strip_prefix(prefix).map(|rest| {
                let value = match directive {
                    Directive::Import => &line[IMPORT_MARKER.len()..],
                    _ => rest.trim(),
                };
                (directive, value)
            }),
        })
}

/// The result of running the grammar over one node label.
#[derive(Debug, Clone)]
pub struct ParsedNode {
    class: ClassDescriptor,
    package_span: Span,
    method_spans: Vec<Span>,
    diagnostics: Vec<Diagnostic>,
}

impl ParsedNode {
    /// Borrow the class descriptor.
    pub fn class(&self) -> &ClassDescriptor {
        &self.class
    }

    /// Span of the package path line in the node text.
    pub fn package_span(&self) -> Span {
        self.package_span
    }

    /// Span of each raw method line, parallel to
    /// [`ClassDescriptor::raw_methods`].
    pub fn method_spans(&self) -> &[Span] {
        &self.method_spans
    }

    /// Grammar warnings, in line order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Parse the label of one class node.
///
/// Unrecognized lines produce warnings and are skipped.
///
/// # Errors
///
/// Returns an [`ErrorCode::E100`] diagnostic if the label has no non-blank
/// line.
///
/// # Examples
///
/// ```
/// use umlstub_parser::parse_node;
///
/// let node = parse_node("a.b.Widget\n//desc:A widget\n--\nname\n--\nrender(x: int = 0): str")
///     .unwrap();
///
/// assert_eq!(node.class().package_path(), "a.b.Widget");
/// assert_eq!(node.class().description(), "A widget");
/// assert_eq!(node.class().attributes(), ["name"]);
/// assert_eq!(node.class().raw_methods(), ["render(x: int = 0): str"]);
/// ```
pub fn parse_node(text: &str) -> Result<ParsedNode, Diagnostic> {
    let mut collector = DiagnosticCollector::new();
    let (class, package_span, method_spans) = parse_node_into(text, &mut collector)?;

    Ok(ParsedNode {
        class,
        package_span,
        method_spans,
        diagnostics: collector.finish(),
    })
}

pub(crate) fn parse_node_into(
    text: &str,
    collector: &mut DiagnosticCollector,
) -> Result<(ClassDescriptor, Span, Vec<Span>), Diagnostic> {
    let mut lines = trimmed_lines(text).filter(|(line, _)| !line.is_empty());

    let Some((package_path, package_span)) = lines.next() else {
        return Err(Diagnostic::error("class node has no package path")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..text.len()), "empty label")
            .with_help("the first line of a class node must be its dotted package path"));
    };

    let mut class = ClassDescriptor::new(package_path);
    let mut method_spans = Vec::new();
    let mut section = Section::None;

    for (line, span) in lines {
        if let Some((directive, value)) = match_directive(line) {
            apply_directive(&mut class, directive, value, span, collector);
            continue;
        }

        if line == SECTION_SEPARATOR {
            section = section.on_separator();
            trace!(section:?; "Entered section");
            continue;
        }

        match section {
            Section::Attributes => class.push_attribute(line),
            Section::Methods if line.chars().count() > METHOD_NOISE_LEN => {
                class.push_raw_method(line);
                method_spans.push(span);
            }
            Section::Methods => debug!(line; "Discarding short method line"),
            Section::None => collector.emit(
                Diagnostic::warning(format!("unrecognized line `{line}`"))
                    .with_code(ErrorCode::E101)
                    .with_label(span, "not a directive, and no section has started")
                    .with_help("attributes and methods must follow a `--` separator line"),
            ),
        }
    }

    debug!(
        package_path = class.package_path(),
        attributes = class.attributes().len(),
        methods = class.raw_methods().len();
        "Parsed class node"
    );

    Ok((class, package_span, method_spans))
}

fn apply_directive(
    class: &mut ClassDescriptor,
    directive: Directive,
    value: &str,
    span: Span,
    collector: &mut DiagnosticCollector,
) {
    match directive {
        Directive::Singleton => class.set_singleton(),
        Directive::Import => class.push_import(value),
        Directive::Description | Directive::Inherits if value.is_empty() => collector.emit(
            Diagnostic::warning("directive has no value")
                .with_code(ErrorCode::E102)
                .with_label(span, "nothing after the marker"),
        ),
        Directive::Description => class.set_description(value),
        Directive::Inherits => class.set_inherits_from(value),
    }
}

/// Split text into trimmed lines, each with the span of its trimmed content.
fn trimmed_lines(text: &str) -> impl Iterator<Item = (&str, Span)> {
    let mut offset = 0;
    text.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;

        let leading = raw.len() - raw.trim_start().len();
        let line = raw.trim();
        let begin = start + leading;
        (line, Span::new(begin..begin + line.len()))
    })
}
