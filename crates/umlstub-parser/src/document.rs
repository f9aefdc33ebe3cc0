//! Diagram reader for UMLet `.uxf` documents.
//!
//! A UMLet document is a `<diagram>` root holding `<element>` children. Each
//! element names its kind in `<id>` and carries its free-text label in
//! `<panel_attributes>`:
//!
//! ```xml
//! <diagram program="umlet" version="14.3.0">
//!   <element>
//!     <id>UMLClass</id>
//!     <coordinates><x>10</x><y>10</y><w>200</w><h>120</h></coordinates>
//!     <panel_attributes>app.models.User
//! --
//! name
//! --
//! greet(other: str = None) -&gt; str</panel_attributes>
//!     <additional_attributes/>
//!   </element>
//! </diagram>
//! ```
//!
//! Only the labels of elements whose kind matches the requested node kind
//! are kept; everything else (coordinates, relations, notes) is ignored.

use log::{debug, trace};
use quick_xml::{Reader, events::Event};

use umlstub_core::semantic::DiagramDocument;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Which child of `<element>` the reader is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Kind,
    Label,
}

/// Text collected for the `<element>` being read.
#[derive(Debug, Default)]
struct ElementText {
    kind: String,
    label: String,
}

impl ElementText {
    fn push(&mut self, field: Field, text: &str) {
        match field {
            Field::Kind => self.kind.push_str(text),
            Field::Label => self.label.push_str(text),
        }
    }
}

/// Read the class-node labels out of a UMLet document.
///
/// # Arguments
///
/// * `source` - The document text
/// * `node_kind` - The element kind to extract (UMLet uses `UMLClass`)
///
/// # Errors
///
/// Returns a [`ParseError`] carrying an [`ErrorCode::E001`] diagnostic when
/// the markup is not well-formed, or [`ErrorCode::E002`] when the document
/// has no root element or ends inside an open element. Spans index into
/// `source`.
pub fn read_document(source: &str, node_kind: &str) -> Result<DiagramDocument, ParseError> {
    let mut reader = Reader::from_str(source);

    let mut depth = 0usize;
    let mut seen_root = false;
    let mut element: Option<ElementText> = None;
    let mut field: Option<Field> = None;
    let mut nodes = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|err| malformed(source, reader.error_position(), err))?;

        match event {
            Event::Start(start) => {
                depth += 1;
                seen_root = true;
                match start.name().as_ref() {
                    b"element" => element = Some(ElementText::default()),
                    b"id" if element.is_some() => field = Some(Field::Kind),
                    b"panel_attributes" if element.is_some() => field = Some(Field::Label),
                    _ => {}
                }
            }
            Event::Empty(_) => seen_root = true,
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                match end.name().as_ref() {
                    b"element" => {
                        if let Some(text) = element.take() {
                            collect_node(text, node_kind, &mut nodes);
                        }
                        field = None;
                    }
                    b"id" | b"panel_attributes" => field = None,
                    _ => {}
                }
            }
            Event::Text(text) => {
                if let (Some(current), Some(field)) = (element.as_mut(), field) {
                    let text = text
                        .unescape()
                        .map_err(|err| malformed(source, reader.buffer_position(), err))?;
                    current.push(field, &text);
                }
            }
            Event::CData(data) => {
                if let (Some(current), Some(field)) = (element.as_mut(), field) {
                    current.push(field, &String::from_utf8_lossy(&data));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(unexpected_end(source, "document has no root element"));
    }
    if depth > 0 {
        return Err(unexpected_end(
            source,
            format!("document ends with {depth} unclosed element(s)"),
        ));
    }

    debug!(nodes = nodes.len(), node_kind; "Read diagram document");
    Ok(DiagramDocument::new(nodes))
}

fn collect_node(text: ElementText, node_kind: &str, nodes: &mut Vec<String>) {
    let kind = text.kind.trim();
    if kind != node_kind {
        trace!(kind; "Ignoring element");
        return;
    }
    if text.label.trim().is_empty() {
        debug!(kind; "Ignoring class node without label");
        return;
    }
    nodes.push(text.label);
}

fn malformed<P, E>(source: &str, position: P, err: E) -> ParseError
where
    usize: TryFrom<P>,
    E: std::fmt::Display,
{
    let offset = usize::try_from(position)
        .unwrap_or(source.len())
        .min(source.len());
    let span = Span::new(offset..(offset + 1).min(source.len()));

    Diagnostic::error(format!("malformed diagram document: {err}"))
        .with_code(ErrorCode::E001)
        .with_label(span, "markup error here")
        .with_help("the input must be a well-formed UMLet .uxf XML file")
        .into()
}

fn unexpected_end(source: &str, message: impl Into<String>) -> ParseError {
    let end = source.len();
    Diagnostic::error(message)
        .with_code(ErrorCode::E002)
        .with_label(Span::new(end..end), "document ends here")
        .into()
}
