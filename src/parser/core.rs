use streaming_iterator::StreamingIterator;
use thiserror::Error;
use tree_sitter::{Language, Node, Parser, Query, QueryCursor};

use crate::models::{FunctionSignature, GoType, Parameter, ResultField};

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("Parse error")]
    ParseError,
    #[error("Syntax error at {line}:{column}")]
    Syntax { line: usize, column: usize },
    #[error("Query error: {0}")]
    QueryError(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParserError>;

// Only direct children of the file: method_declaration and func_literal never match.
const GO_FUNCTION_QUERY: &str = r#"
(source_file
  (function_declaration) @function)
"#;

/// tree-sitter backed extractor of top-level Go function signatures.
pub struct GoParser {
    parser: Parser,
    query: Query,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let language: Language = tree_sitter_go::LANGUAGE.into();

        let mut parser = Parser::new();
        parser
            .set_language(&language)
            .map_err(|e| ParserError::UnsupportedLanguage(e.to_string()))?;

        let query = Query::new(&language, GO_FUNCTION_QUERY)
            .map_err(|e| ParserError::QueryError(e.message.to_string()))?;

        Ok(Self { parser, query })
    }

    /// Parse Go source and return its top-level functions in declaration order.
    ///
    /// Source with any syntax error is rejected as a whole.
    pub fn parse_source(&mut self, code: &str) -> Result<Vec<FunctionSignature>> {
        let tree = self.parser.parse(code, None).ok_or(ParserError::ParseError)?;
        let root = tree.root_node();

        if root.has_error() {
            let (line, column) = first_error_position(root).unwrap_or((0, 0));
            return Err(ParserError::Syntax { line, column });
        }
        check_file_layout(root)?;

        let mut cursor = QueryCursor::new();
        let mut signatures = Vec::new();

        let mut matches = cursor.matches(&self.query, root, code.as_bytes());
        while let Some(match_) = matches.next() {
            for capture in match_.captures {
                if let Some(sig) = extract_function(capture.node, code) {
                    signatures.push(sig);
                }
            }
        }

        Ok(signatures)
    }
}

/// Enforce what tree-sitter-go leaves to the compiler: exactly one leading
/// package clause, imports before any other declaration, and only
/// declarations at the top level.
fn check_file_layout(root: Node<'_>) -> Result<()> {
    let mut seen_package = false;
    let mut seen_declaration = false;

    for i in 0..root.named_child_count() {
        let Some(node) = root.named_child(i) else { continue };
        let valid = match node.kind() {
            "comment" => true,
            "package_clause" => !std::mem::replace(&mut seen_package, true),
            "import_declaration" => seen_package && !seen_declaration,
            "function_declaration" | "method_declaration" | "type_declaration"
            | "const_declaration" | "var_declaration" => {
                seen_declaration = true;
                seen_package
            }
            _ => false,
        };
        if !valid {
            return Err(syntax_error_at(node));
        }
    }

    if seen_package {
        Ok(())
    } else {
        Err(ParserError::Syntax { line: 1, column: 1 })
    }
}

fn syntax_error_at(node: Node<'_>) -> ParserError {
    let pos = node.start_position();
    ParserError::Syntax {
        line: pos.row + 1,
        column: pos.column + 1,
    }
}

/// 1-based line/column of the first ERROR or MISSING node.
fn first_error_position(node: Node<'_>) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some((pos.row + 1, pos.column + 1));
    }
    if !node.has_error() {
        return None;
    }
    for i in 0..node.child_count() {
        let Some(child) = node.child(i) else { continue };
        if let Some(pos) = first_error_position(child) {
            return Some(pos);
        }
    }
    None
}

fn extract_function(node: Node<'_>, code: &str) -> Option<FunctionSignature> {
    let name_node = node.child_by_field_name("name")?;
    let name = &code[name_node.byte_range()];

    let parameters = node
        .child_by_field_name("parameters")
        .map(|list| extract_parameters(list, code))
        .unwrap_or_default();

    let results = match node.child_by_field_name("result") {
        Some(result) if result.kind() == "parameter_list" => extract_results(result, code),
        Some(result) => vec![ResultField {
            ty: classify_type(result, code),
        }],
        None => Vec::new(),
    };

    Some(FunctionSignature::new(name, parameters, results))
}

/// One `Parameter` per declared name, so `a, b int` yields two entries.
/// Unnamed parameters get a positional `argN` name.
fn extract_parameters(list: Node<'_>, code: &str) -> Vec<Parameter> {
    let mut params = Vec::new();

    for i in 0..list.named_child_count() {
        let Some(decl) = list.named_child(i) else { continue };
        let ty = match decl.kind() {
            "parameter_declaration" => decl
                .child_by_field_name("type")
                .map(|t| classify_type(t, code)),
            // `...T` has no proto counterpart
            "variadic_parameter_declaration" => {
                Some(GoType::Unsupported(code[decl.byte_range()].to_string()))
            }
            _ => None,
        };
        let Some(ty) = ty else { continue };

        let names = declared_names(decl, code);
        if names.is_empty() {
            params.push(Parameter {
                name: format!("arg{}", params.len() + 1),
                ty,
            });
        } else {
            for name in names {
                params.push(Parameter {
                    name,
                    ty: ty.clone(),
                });
            }
        }
    }

    params
}

/// Results in parenthesized form: `(int, error)` or `(n int, err error)`.
fn extract_results(list: Node<'_>, code: &str) -> Vec<ResultField> {
    let mut results = Vec::new();

    for i in 0..list.named_child_count() {
        let Some(decl) = list.named_child(i) else { continue };
        if decl.kind() != "parameter_declaration" {
            continue;
        }
        let Some(type_node) = decl.child_by_field_name("type") else { continue };
        let ty = classify_type(type_node, code);
        let count = declared_names(decl, code).len().max(1);
        for _ in 0..count {
            results.push(ResultField { ty: ty.clone() });
        }
    }

    results
}

fn declared_names(decl: Node<'_>, code: &str) -> Vec<String> {
    let mut cursor = decl.walk();
    let names = decl
        .children_by_field_name("name", &mut cursor)
        .map(|n| code[n.byte_range()].to_string())
        .collect();
    names
}

fn classify_type(node: Node<'_>, code: &str) -> GoType {
    match node.kind() {
        "type_identifier" | "identifier" => GoType::Scalar(code[node.byte_range()].to_string()),
        "slice_type" | "array_type" => match node.child_by_field_name("element") {
            Some(elem) if elem.kind() == "type_identifier" => {
                GoType::ArrayOf(code[elem.byte_range()].to_string())
            }
            _ => GoType::Unsupported(code[node.byte_range()].to_string()),
        },
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => classify_type(inner, code),
            None => GoType::Unsupported(code[node.byte_range()].to_string()),
        },
        _ => GoType::Unsupported(code[node.byte_range()].to_string()),
    }
}
