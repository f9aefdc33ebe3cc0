use umlstub_parser::{error::ErrorCode, parse_class, read_document};

const DIAGRAM: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<diagram program="umlet" version="14.3.0">
  <zoom_level>10</zoom_level>
  <element>
    <id>UMLClass</id>
    <coordinates><x>10</x><y>10</y><w>200</w><h>120</h></coordinates>
    <panel_attributes>a.b.Widget
//desc:A widget
--
name
--
render(x: integer = 0):string
bad(x y)
reset()</panel_attributes>
    <additional_attributes/>
  </element>
  <element>
    <id>UMLNote</id>
    <coordinates><x>300</x><y>10</y><w>100</w><h>40</h></coordinates>
    <panel_attributes>not a class</panel_attributes>
    <additional_attributes/>
  </element>
  <element>
    <id>Relation</id>
    <coordinates><x>100</x><y>130</y><w>20</w><h>60</h></coordinates>
    <panel_attributes>lt=&lt;&lt;-</panel_attributes>
    <additional_attributes>10;10;10;40</additional_attributes>
  </element>
  <element>
    <id>UMLClass</id>
    <coordinates><x>10</x><y>200</y><w>200</w><h>120</h></coordinates>
    <panel_attributes>a.b.Gadget
//inherits:a.b.Widget
//singleton
--
--
describe(self_test: bool = False) -&gt; dict</panel_attributes>
    <additional_attributes/>
  </element>
</diagram>
"#;

#[test]
fn test_document_to_classes() {
    let document = read_document(DIAGRAM, "UMLClass").expect("Failed to read document");
    assert_eq!(document.len(), 2);

    let classes: Vec<_> = document
        .iter()
        .map(|text| parse_class(text).expect("Failed to parse class"))
        .collect();

    let widget = &classes[0];
    assert_eq!(widget.descriptor().package_path(), "a.b.Widget");
    assert_eq!(widget.descriptor().description(), "A widget");
    let names: Vec<_> = widget.methods().iter().map(|m| m.name()).collect();
    assert_eq!(names, ["render", "reset"]);
    assert_eq!(widget.diagnostics().len(), 1);
    assert_eq!(widget.diagnostics()[0].code(), Some(ErrorCode::E203));

    let gadget = &classes[1];
    assert_eq!(gadget.descriptor().package_path(), "a.b.Gadget");
    assert!(gadget.descriptor().is_singleton());
    assert_eq!(gadget.descriptor().inherits_from(), Some("a.b.Widget"));
    assert_eq!(gadget.methods().len(), 1);
    assert_eq!(gadget.methods()[0].name(), "describe");
    assert!(gadget.diagnostics().is_empty());
}

#[test]
fn test_other_node_kind() {
    let document = read_document(DIAGRAM, "UMLNote").expect("Failed to read document");

    assert_eq!(document.nodes(), ["not a class"]);
}

#[test]
fn test_malformed_document_is_rejected() {
    let broken = DIAGRAM.replace("</panel_attributes>\n    <additional_attributes/>\n  </element>\n</diagram>", "</diagram>");

    let err = read_document(&broken, "UMLClass").unwrap_err();

    assert!(!err.diagnostics().is_empty());
    assert!(
        err.diagnostics()
            .iter()
            .all(|d| d.severity().is_error())
    );
}
