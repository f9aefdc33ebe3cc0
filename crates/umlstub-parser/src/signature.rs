//! Method signature parser.
//!
//! Accepts both annotation styles found in class diagrams:
//!
//! ```text
//! name(param: type = default, ...): returnType
//! name(param: type = default, ...) -> returnType
//! ```
//!
//! The name ends at the first `(` and the parameter list at the last `)`.
//! Parameters are separated by plain commas, so parameter types that contain
//! commas or parentheses (`Dict[str, int]`, `Callable[[int], str]`) are not
//! supported and will be split at the wrong place.

use winnow::{
    Parser as _,
    combinator::{opt, preceded, terminated},
    error::{ContextError, ErrMode},
    token::{take_till, take_while},
};

use umlstub_core::{
    datatype::DataType,
    semantic::{MethodDescriptor, Parameter, VISIBILITY_MARKERS},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Raw `name`, `: type` and `= default` tokens of one parameter segment.
type ParameterTokens<'src> = (&'src str, Option<&'src str>, Option<&'src str>);

/// Parse everything up to and including the first `(`.
fn method_head<'src>(input: &mut &'src str) -> IResult<&'src str> {
    terminated(take_till(0.., '('), '(').parse_next(input)
}

/// Parse `name [: type] [= default]`; the type runs up to the first `=`.
fn parameter_tokens<'src>(input: &mut &'src str) -> IResult<ParameterTokens<'src>> {
    (
        take_till(0.., (':', '=')),
        opt(preceded(':', take_till(0.., '='))),
        opt(preceded('=', take_while(0.., |_: char| true))),
    )
        .parse_next(input)
}

/// Parse one raw method line into a [`MethodDescriptor`].
///
/// Spans in the returned diagnostic index into `line`.
///
/// # Errors
///
/// - [`ErrorCode::E200`] if the line has no `(`
/// - [`ErrorCode::E201`] if no `)` follows the first `(`
/// - [`ErrorCode::E202`] if the name before `(` is empty once UML
///   visibility markers are stripped
/// - [`ErrorCode::E203`] if a parameter has neither `:` nor `=`
/// - [`ErrorCode::E204`] if a parameter has no name
///
/// # Examples
///
/// ```
/// use umlstub_core::datatype::DataType;
/// use umlstub_parser::parse_signature;
///
/// let method = parse_signature("render(x: integer = 0): string").unwrap();
///
/// assert_eq!(method.name(), "render");
/// assert_eq!(method.parameters()[0].name(), "x");
/// assert_eq!(method.parameters()[0].datatype(), Some(&DataType::Integer));
/// assert_eq!(method.parameters()[0].default(), Some("0"));
/// assert_eq!(method.return_type(), Some(&DataType::String));
/// ```
pub fn parse_signature(line: &str) -> Result<MethodDescriptor, Diagnostic> {
    let whole = Span::new(0..line.len());

    let mut rest = line;
    let head = method_head.parse_next(&mut rest).map_err(|_| {
        Diagnostic::error(format!("missing `(` in method signature `{line}`"))
            .with_code(ErrorCode::E200)
            .with_label(whole, "expected `name(...)`")
    })?;
    let open = head.len();

    let name = head.trim().trim_start_matches(VISIBILITY_MARKERS).trim_start();
    if name.is_empty() {
        return Err(Diagnostic::error("method signature has no name")
            .with_code(ErrorCode::E202)
            .with_label(Span::new(open..open + 1), "name expected before `(`"));
    }

    let Some(close) = rest.rfind(')') else {
        return Err(
            Diagnostic::error(format!("missing `)` in method signature `{line}`"))
                .with_code(ErrorCode::E201)
                .with_label(Span::new(open..open + 1), "parameter list opened here")
                .with_secondary_label(whole, "in this method"),
        );
    };

    let params_offset = open + 1;
    let parameters = parse_parameters(&rest[..close], params_offset)
        .map_err(|diag| diag.with_secondary_label(whole, "in this method"))?;
    let return_type = parse_return_type(&rest[close + 1..]);

    Ok(MethodDescriptor::new(name, parameters, return_type))
}

/// Parse the text between the parentheses. `offset` is its position in the
/// method line.
fn parse_parameters(list: &str, offset: usize) -> Result<Vec<Parameter>, Diagnostic> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut parameters = Vec::new();
    let mut start = offset;
    for segment in list.split(',') {
        let leading = segment.len() - segment.trim_start().len();
        let span = Span::new(start + leading..start + leading + segment.trim().len());
        parameters.push(parse_parameter(segment, span)?);
        start += segment.len() + 1;
    }
    Ok(parameters)
}

fn parse_parameter(segment: &str, span: Span) -> Result<Parameter, Diagnostic> {
    let mut input = segment;
    let (name, datatype, default) = parameter_tokens
        .parse_next(&mut input)
        .map_err(|_| missing_separator(segment, span))?;

    if datatype.is_none() && default.is_none() {
        return Err(missing_separator(segment, span));
    }

    let name = name.trim();
    if name.is_empty() {
        return Err(Diagnostic::error("parameter has no name")
            .with_code(ErrorCode::E204)
            .with_label(span, "name expected before `:` or `=`"));
    }

    let datatype = datatype
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(DataType::from_token);
    let default = default
        .map(str::trim)
        .filter(|literal| !literal.is_empty())
        .map(str::to_string);

    Ok(Parameter::new(name, datatype, default))
}

fn missing_separator(segment: &str, span: Span) -> Diagnostic {
    Diagnostic::error(format!(
        "parameter `{}` has neither `:` nor `=`",
        segment.trim()
    ))
    .with_code(ErrorCode::E203)
    .with_label(span, "expected `name: type = default`")
    .with_help("separate the name from its type with `:` or give it a default with `=`")
}

/// Strip a leading `->` or `:` and a trailing `:` from the text after `)`.
fn parse_return_type(annotation: &str) -> Option<DataType> {
    let mut text = annotation.trim();
    while let Some(stripped) = text
        .strip_prefix("->")
        .or_else(|| text.strip_prefix(':'))
    {
        text = stripped.trim_start();
    }
    let text = text.trim_end_matches(':').trim();

    (!text.is_empty()).then(|| DataType::from_token(text))
}
