//! Python stub rendering.
//!
//! [`StubRenderer`] turns one class into the text of its stub file. The
//! layout is fixed:
//!
//! ```text
//! import ...                      <- import directives, in order
//! from singleton_decorator ...    <- singleton classes only
//! from a.base import Base         <- dotted base classes only
//!                                 <- blank, always
//! @singleton                      <- singleton classes only
//! class Widget(Base):
//!     """description"""
//!     def __init__(self, **kwargs): ...
//!     def <method>(self, ...) -> ...: ...
//!     def _check_infile_status(self, infile: str = None) -> None: ...
//! ```
//!
//! Rendering has no side effects and is deterministic.

use log::{trace, warn};

use umlstub_core::{
    package::PathPlan,
    semantic::{ClassDescriptor, MethodDescriptor, Parameter, VISIBILITY_MARKERS},
};

use crate::config::RenderConfig;

/// Name of the generated input-file check helper.
const CHECK_HELPER: &str = "_check_infile_status";

/// Lines of a stub under construction.
#[derive(Debug)]
struct Lines<'a> {
    indent: &'a str,
    text: String,
}

impl<'a> Lines<'a> {
    fn new(indent: &'a str) -> Self {
        Self {
            indent,
            text: String::new(),
        }
    }

    fn push(&mut self, depth: usize, line: impl AsRef<str>) {
        for _ in 0..depth {
            self.text.push_str(self.indent);
        }
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn finish(self) -> String {
        self.text
    }
}

/// A constructor-assigned field parsed from an attribute entry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Field<'a> {
    name: &'a str,
    annotation: Option<&'a str>,
}

impl<'a> Field<'a> {
    /// Read `name`, `name: type` or `name: type = default`. Visibility
    /// markers are dropped from the name and a default is ignored.
    fn parse(attribute: &'a str) -> Option<Self> {
        let (name, annotation) = match attribute.split_once(':') {
            Some((name, rest)) => {
                let annotation = rest.split_once('=').map_or(rest, |(ty, _)| ty).trim();
                (name, (!annotation.is_empty()).then_some(annotation))
            }
            None => (attribute.split_once('=').map_or(attribute, |(n, _)| n), None),
        };

        let name = name.trim().trim_start_matches(VISIBILITY_MARKERS).trim();
        (!name.is_empty()).then_some(Self { name, annotation })
    }
}

/// Renders class descriptors into stub text.
///
/// # Examples
///
/// ```
/// use umlstub::{config::RenderConfig, render::StubRenderer};
/// use umlstub_core::{package::PathPlan, semantic::ClassDescriptor};
///
/// let class = ClassDescriptor::new("a.b.Widget").with_attribute("name");
/// let plan = PathPlan::resolve(class.package_path()).unwrap();
///
/// let config = RenderConfig::default();
/// let text = StubRenderer::new(&config).render(&class, &[], &plan);
///
/// assert!(text.starts_with("\nclass Widget():\n"));
/// assert!(text.contains("self.name = kwargs['name']"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StubRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> StubRenderer<'a> {
    /// Create a renderer for the given settings.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// Render the stub for `class` with its parsed `methods`. The class name
    /// is taken from `plan`.
    pub fn render(
        &self,
        class: &ClassDescriptor,
        methods: &[MethodDescriptor],
        plan: &PathPlan,
    ) -> String {
        let mut lines = Lines::new(self.config.indent());

        self.render_imports(&mut lines, class);

        if class.is_singleton() {
            lines.push(0, self.config.singleton_decorator());
        }
        match class.inherits_from() {
            Some(base) => lines.push(
                0,
                format!("class {}({}):", plan.class_name(), base_name(base)),
            ),
            None => lines.push(0, format!("class {}():", plan.class_name())),
        }

        lines.push(1, "\"\"\"");
        lines.push(1, class.description());
        lines.push(1, "\"\"\"");
        lines.blank();

        self.render_constructor(&mut lines, class);
        for method in methods {
            lines.blank();
            self.render_method(&mut lines, method);
        }
        lines.blank();
        render_check_helper(&mut lines);

        trace!(
            class_name = plan.class_name(),
            methods = methods.len();
            "Rendered stub"
        );
        lines.finish()
    }

    fn render_imports(&self, lines: &mut Lines<'_>, class: &ClassDescriptor) {
        for import in class.imports() {
            lines.push(0, import);
        }
        if class.is_singleton() {
            lines.push(0, self.config.singleton_import());
        }
        if let Some((module, base)) = class.inherits_from().and_then(|b| b.rsplit_once('.')) {
            lines.push(0, format!("from {module} import {base}"));
        }
        lines.blank();
    }

    fn render_constructor(&self, lines: &mut Lines<'_>, class: &ClassDescriptor) {
        lines.push(1, "def __init__(self, **kwargs):");

        let mut body = false;
        for attribute in class.attributes() {
            let Some(field) = Field::parse(attribute) else {
                warn!(attribute = attribute.as_str(); "Skipping attribute without a name");
                continue;
            };

            lines.push(2, format!("if '{}' in kwargs:", field.name));
            match field.annotation {
                Some(annotation) => lines.push(
                    3,
                    format!("self.{0}: {annotation} = kwargs['{0}']", field.name),
                ),
                None => lines.push(3, format!("self.{0} = kwargs['{0}']", field.name)),
            }
            body = true;
        }

        if !body {
            lines.push(2, "pass");
        }
    }

    fn render_method(&self, lines: &mut Lines<'_>, method: &MethodDescriptor) {
        let mut header = format!("def {}(self", method.name());
        for parameter in method.parameters() {
            header.push_str(", ");
            header.push_str(&parameter.to_string());
        }
        let ret = method.return_type().map_or("None", |ty| ty.python_name());
        header.push_str(&format!(") -> {ret}:"));
        lines.push(1, header);

        lines.push(2, "'''");
        for parameter in method.parameters() {
            lines.push(2, self.parameter_doc(parameter));
        }
        lines.push(2, format!(":returns: {{{ret}}}"));
        lines.push(2, "'''");

        for parameter in method.parameters().iter().filter(|p| p.is_input_file()) {
            lines.push(2, format!("self.{CHECK_HELPER}({})", parameter.name()));
        }
    }

    fn parameter_doc(&self, parameter: &Parameter) -> String {
        let placeholder = self.config.parameter_placeholder();
        match parameter.datatype() {
            Some(datatype) => format!(":param {}: {{{datatype}}} - {placeholder}", parameter.name()),
            None => format!(":param {}: {placeholder}", parameter.name()),
        }
    }
}

/// Class name used in the header for a base class path.
fn base_name(base: &str) -> &str {
    base.rsplit_once('.').map_or(base, |(_, name)| name)
}

fn render_check_helper(lines: &mut Lines<'_>) {
    lines.push(1, format!("def {CHECK_HELPER}(self, infile: str = None) -> None:"));
    lines.push(2, "'''");
    lines.push(2, "Exit unless the input file exists, is a file and has content.");
    lines.push(2, ":param infile: {str} - path of the input file");
    lines.push(2, "'''");
    lines.push(2, "import logging");
    lines.push(2, "import os");
    lines.push(2, "import sys");
    lines.blank();

    let checks = [
        (
            "infile is None or infile == ''",
            "logging.error(\"input file was not defined\")",
        ),
        (
            "not os.path.exists(infile)",
            "logging.error(\"'{}' does not exist\".format(infile))",
        ),
        (
            "not os.path.isfile(infile)",
            "logging.error(\"'{}' is not a regular file\".format(infile))",
        ),
        (
            "os.stat(infile).st_size == 0",
            "logging.error(\"'{}' has no content\".format(infile))",
        ),
    ];
    for (i, (condition, message)) in checks.into_iter().enumerate() {
        if i > 0 {
            lines.blank();
        }
        lines.push(2, format!("if {condition}:"));
        lines.push(3, message);
        lines.push(3, "sys.exit(1)");
    }
}

#[cfg(test)]
mod tests {
    use umlstub_core::datatype::DataType;

    use super::*;

    fn render(class: &ClassDescriptor, methods: &[MethodDescriptor]) -> String {
        let config = RenderConfig::default();
        let plan = PathPlan::resolve(class.package_path()).unwrap();
        StubRenderer::new(&config).render(class, methods, &plan)
    }

    fn render_method(method: MethodDescriptor) -> String {
        render(&ClassDescriptor::new("a.b.Widget"), &[method])
    }

    #[test]
    fn test_field_parse() {
        assert_eq!(
            Field::parse("name"),
            Some(Field {
                name: "name",
                annotation: None
            })
        );
        assert_eq!(
            Field::parse("-age: int = 3"),
            Some(Field {
                name: "age",
                annotation: Some("int")
            })
        );
        assert_eq!(
            Field::parse("count = 0"),
            Some(Field {
                name: "count",
                annotation: None
            })
        );
        assert_eq!(Field::parse("+ :str"), None);
    }

    #[test]
    fn test_plain_class_starts_with_blank_separator() {
        let text = render(&ClassDescriptor::new("a.b.Widget"), &[]);

        assert!(text.starts_with("\nclass Widget():\n"));
        assert!(text.contains("    INSERT CLASS DESCRIPTION HERE\n"));
        assert!(text.contains("    def __init__(self, **kwargs):\n        pass\n"));
    }

    #[test]
    fn test_header_order() {
        let class = ClassDescriptor::new("a.b.Registry")
            .with_import("import os")
            .with_import("from typing import Optional")
            .with_singleton()
            .with_inherits_from("a.base.Base")
            .with_description("Keeps track of things");

        let text = render(&class, &[]);
        let head: Vec<&str> = text.lines().take(8).collect();

        assert_eq!(
            head,
            [
                "import os",
                "from typing import Optional",
                "from singleton_decorator import singleton",
                "from a.base import Base",
                "",
                "@singleton",
                "class Registry(Base):",
                "    \"\"\"",
            ]
        );
    }

    #[test]
    fn test_undotted_base_has_no_import() {
        let class = ClassDescriptor::new("a.b.Widget").with_inherits_from("object");

        let text = render(&class, &[]);

        assert!(text.starts_with("\nclass Widget(object):\n"));
    }

    #[test]
    fn test_constructor_fields_in_order() {
        let class = ClassDescriptor::new("a.b.Widget")
            .with_attribute("name")
            .with_attribute("-size: int");

        let text = render(&class, &[]);

        let expected = "    def __init__(self, **kwargs):
        if 'name' in kwargs:
            self.name = kwargs['name']
        if 'size' in kwargs:
            self.size: int = kwargs['size']
";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn test_visibility_marker_on_method_name() {
        let method = umlstub_parser::parse_signature("+render(x: int = 0): str").unwrap();

        let text = render_method(method);

        assert!(text.contains("    def render(self, x: int = 0) -> str:\n"), "{text}");
        assert!(!text.contains("def +"));
    }

    #[test]
    fn test_method_rendering() {
        let method = MethodDescriptor::new(
            "render",
            vec![
                Parameter::new("x", Some(DataType::Integer), Some("0".to_string())),
                Parameter::new("verbose", None, Some("False".to_string())),
            ],
            Some(DataType::String),
        );

        let text = render_method(method);

        let expected = "    def render(self, x: int = 0, verbose = False) -> str:
        '''
        :param x: {int} - INSERT PARAMETER DESCRIPTION HERE
        :param verbose: INSERT PARAMETER DESCRIPTION HERE
        :returns: {str}
        '''
";
        assert!(text.contains(expected), "{text}");
    }

    #[test]
    fn test_missing_return_type_is_none() {
        let text = render_method(MethodDescriptor::new("reset", Vec::new(), None));

        assert!(text.contains("    def reset(self) -> None:\n"));
        assert!(text.contains(":returns: {None}"));
    }

    #[test]
    fn test_input_file_parameters_are_checked() {
        let method = MethodDescriptor::new(
            "convert",
            vec![
                Parameter::new("infile", Some(DataType::String), None),
                Parameter::new("outfile", Some(DataType::String), None),
                Parameter::new("config_file", Some(DataType::String), None),
            ],
            None,
        );

        let text = render_method(method);

        assert!(text.contains("        self._check_infile_status(infile)\n"));
        assert!(text.contains("        self._check_infile_status(config_file)\n"));
        assert!(!text.contains("self._check_infile_status(outfile)"));
    }

    #[test]
    fn test_helper_emitted_once() {
        let infile = || {
            MethodDescriptor::new(
                "load",
                vec![Parameter::new("infile", Some(DataType::String), None)],
                None,
            )
        };

        let text = render(&ClassDescriptor::new("a.b.Widget"), &[infile(), infile()]);

        assert_eq!(text.matches("def _check_infile_status(").count(), 1);
        assert_eq!(text.matches("sys.exit(1)").count(), 4);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = RenderConfig::default();
        let plan = PathPlan::resolve("a.b.Widget").unwrap();
        let class = ClassDescriptor::new("a.b.Widget").with_singleton();

        let first = StubRenderer::new(&config).render(&class, &[], &plan);
        let second = StubRenderer::new(&config).render(&class, &[], &plan);

        assert_eq!(first, second);
        assert!(first.starts_with("from singleton_decorator import singleton\n\n@singleton\n"));
    }
}
