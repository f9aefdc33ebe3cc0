//! Integration tests for the StubBuilder API

use std::{fs, path::Path};

use umlstub::{StubBuilder, UmlStubError, config::AppConfig};
use umlstub_parser::error::ErrorCode;

/// Wrap class-node labels in a minimal UMLet document.
fn diagram(labels: &[&str]) -> String {
    let mut source = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<diagram program=\"umlet\" version=\"14.3.0\">\n");
    for label in labels {
        source.push_str("  <element>\n    <id>UMLClass</id>\n    <panel_attributes>");
        source.push_str(
            &label
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;"),
        );
        source.push_str("</panel_attributes>\n    <additional_attributes/>\n  </element>\n");
    }
    source.push_str("</diagram>\n");
    source
}

fn generate(labels: &[&str], outdir: &Path) -> umlstub::GenerationReport {
    let builder = StubBuilder::default();
    let document = builder
        .parse(&diagram(labels))
        .expect("Failed to parse diagram");
    builder.generate(&document, outdir)
}

const WIDGET: &str = "a.b.Widget\n//desc:A widget\n--\nname\n--\nrender(x: integer = 0):string";

#[test]
fn test_builder_with_config() {
    let builder = StubBuilder::new(AppConfig::default());
    assert_eq!(builder.config().output().extension(), "py");
}

#[test]
fn test_widget_stub() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&[WIDGET], out.path());

    assert!(!report.has_failures());
    let stub = report.written().next().expect("Expected a written stub");
    assert_eq!(stub.class_name(), "Widget");
    assert_eq!(stub.path(), out.path().join("a/b.py"));
    assert!(stub.backup().is_none());
    assert_eq!(stub.markers(), [out.path().join("a/__init__.py")]);

    let text = fs::read_to_string(stub.path()).unwrap();
    let expected = "
class Widget():
    \"\"\"
    A widget
    \"\"\"

    def __init__(self, **kwargs):
        if 'name' in kwargs:
            self.name = kwargs['name']

    def render(self, x: int = 0) -> str:
        '''
        :param x: {int} - INSERT PARAMETER DESCRIPTION HERE
        :returns: {str}
        '''
";
    assert!(text.starts_with(expected), "{text}");
    assert_eq!(text.matches("def _check_infile_status(").count(), 1);
}

#[test]
fn test_marker_per_directory_segment() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&["app.core.models.user.User\n--\nname"], out.path());

    let stub = report.written().next().expect("Expected a written stub");
    assert_eq!(stub.markers().len(), 3);
    for dir in ["app", "app/core", "app/core/models"] {
        let marker = out.path().join(dir).join("__init__.py");
        assert_eq!(fs::read(&marker).unwrap(), b"", "{}", marker.display());
    }
    assert!(out.path().join("app/core/models/user.py").is_file());
}

#[test]
fn test_shared_prefix_creates_markers_once() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(
        &["a.b.Widget\n--\nname", "a.c.Gadget\n--\nsize"],
        out.path(),
    );

    let markers: Vec<usize> = report.written().map(|stub| stub.markers().len()).collect();
    assert_eq!(markers, [1, 0]);
    assert!(out.path().join("a/b.py").is_file());
    assert!(out.path().join("a/c.py").is_file());
}

#[test]
fn test_second_run_backs_up_first() {
    let out = tempfile::tempdir().unwrap();
    fs::create_dir_all(out.path().join("a")).unwrap();
    fs::write(out.path().join("a/__init__.py"), "# package\n").unwrap();

    generate(&[WIDGET], out.path());
    let first = fs::read_to_string(out.path().join("a/b.py")).unwrap();

    let report = generate(&[WIDGET], out.path());
    let stub = report.written().next().expect("Expected a written stub");

    assert_eq!(stub.backup(), Some(out.path().join("a/b.py.bak").as_path()));
    assert_eq!(fs::read_to_string(out.path().join("a/b.py.bak")).unwrap(), first);
    assert_eq!(fs::read_to_string(out.path().join("a/b.py")).unwrap(), first);
    assert_eq!(
        fs::read_to_string(out.path().join("a/__init__.py")).unwrap(),
        "# package\n"
    );
}

#[test]
fn test_bad_method_does_not_stop_class() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(
        &["a.b.Widget\n--\n--\nbad(x y)\nreset() -> bool"],
        out.path(),
    );

    let node = &report.nodes()[0];
    assert!(node.is_written());
    assert_eq!(node.diagnostics().len(), 1);
    assert_eq!(node.diagnostics()[0].code(), Some(ErrorCode::E203));

    let text = fs::read_to_string(out.path().join("a/b.py")).unwrap();
    assert!(text.contains("    def reset(self) -> bool:\n"));
    assert!(!text.contains("def bad("));
}

#[test]
fn test_invalid_package_path_is_isolated() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(
        &["Widget\n--\nname", "a..Widget\n--\nname", "a.b.Gadget\n--\nsize"],
        out.path(),
    );

    assert!(report.has_failures());
    assert_eq!(report.failed().count(), 2);
    assert_eq!(report.written().count(), 1);

    let codes: Vec<_> = report
        .failed()
        .map(|node| match node.outcome() {
            Err(UmlStubError::Parse { err, src }) => {
                assert_eq!(src, node.source());
                err.diagnostics()[0].code()
            }
            other => panic!("Expected a parse error, got {other:?}"),
        })
        .collect();
    assert_eq!(codes, [Some(ErrorCode::E300), Some(ErrorCode::E301)]);
}

#[test]
fn test_package_path_cannot_leave_outdir() {
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("out");
    let escape = root.path().join("escape");
    let label = format!("{}/pkg.mod.Widget\n--\nname", escape.display());

    let report = generate(&[label.as_str()], &out);

    assert_eq!(report.failed().count(), 1);
    match report.nodes()[0].outcome() {
        Err(UmlStubError::Parse { err, .. }) => {
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E302));
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
    assert!(!escape.exists());
}

#[test]
fn test_visibility_markers_are_stripped() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&["a.b.W\n--\n+name\n--\n+render(x: int = 0): str"], out.path());

    assert!(!report.has_failures());
    let text = fs::read_to_string(out.path().join("a/b.py")).unwrap();
    assert!(text.contains("self.name = kwargs['name']"));
    assert!(text.contains("    def render(self, x: int = 0) -> str:\n"), "{text}");
}

#[test]
fn test_blank_label_is_not_a_node() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&["   \n", "a.b.Widget\n--\nname"], out.path());

    assert_eq!(report.nodes().len(), 1);
    assert!(!report.has_failures());
    assert!(out.path().join("a/b.py").is_file());
}

#[test]
fn test_grammar_warning_is_reported() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&["a.b.Widget\nstray\n--\nname"], out.path());

    let node = &report.nodes()[0];
    assert!(node.is_written());
    assert_eq!(node.diagnostics().len(), 1);
    assert!(node.diagnostics()[0].severity().is_warning());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.uxf");

    let err = StubBuilder::default().read(&missing).unwrap_err();

    assert!(matches!(err, UmlStubError::NotFound(path) if path == missing));
}

#[test]
fn test_malformed_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.uxf");
    fs::write(&path, "<diagram><element><id>UMLClass</id></diagram>").unwrap();

    let err = StubBuilder::default().read(&path).unwrap_err();

    match err {
        UmlStubError::Parse { err, src } => {
            assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
            assert!(src.starts_with("<diagram>"));
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_non_utf8_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.uxf");
    fs::write(&path, b"<diagram><element>caf\xe9</element></diagram>").unwrap();

    let err = StubBuilder::default().read(&path).unwrap_err();

    match err {
        UmlStubError::Parse { err, src } => {
            let diag = &err.diagnostics()[0];
            assert_eq!(diag.code(), Some(ErrorCode::E001));
            assert_eq!(diag.labels()[0].span().start(), 21);
            assert!(src.starts_with("<diagram><element>caf"));
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[test]
fn test_document_without_classes() {
    let out = tempfile::tempdir().unwrap();

    let report = generate(&[], out.path());

    assert!(report.nodes().is_empty());
    assert!(!report.has_failures());
}
