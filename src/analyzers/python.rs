//! Python front end: lowers tree-sitter parse trees into [`SyntaxNode`]s.
//!
//! The lowering is statement-granular. Expression-level constructs are not
//! materialized; try/with/match statements become `Other` containers so the
//! statements inside their blocks stay reachable.

use crate::analyzers::Analyzer;
use crate::core::ast::SyntaxNode;
use crate::core::errors::{Error, Result};
use crate::core::Language;
use crate::metrics::DEFAULT_RECURSION_LIMIT;
use std::path::Path;
use tree_sitter::Node;

#[derive(Debug)]
pub struct PythonAnalyzer {
    recursion_limit: usize,
}

impl PythonAnalyzer {
    pub fn new() -> Self {
        Self::with_recursion_limit(DEFAULT_RECURSION_LIMIT)
    }

    pub fn with_recursion_limit(recursion_limit: usize) -> Self {
        Self { recursion_limit }
    }
}

impl Default for PythonAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for PythonAnalyzer {
    fn parse(&self, content: &str, path: &Path) -> Result<SyntaxNode> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| Error::Unsupported(format!("failed to load Python grammar: {e}")))?;

        let tree = parser
            .parse(content, None)
            .ok_or_else(|| Error::parse(path, "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(Error::parse(path, "source contains syntax errors"));
        }

        let body = lower_block(root, content.as_bytes(), 1, self.recursion_limit)?;
        Ok(SyntaxNode::module(body))
    }

    fn language(&self) -> Language {
        Language::Python
    }
}

fn lower_block(block: Node, source: &[u8], depth: usize, limit: usize) -> Result<Vec<SyntaxNode>> {
    let mut statements = Vec::new();
    for child in block.named_children(&mut block.walk()) {
        if let Some(statement) = lower_statement(child, source, depth, limit)? {
            statements.push(statement);
        }
    }
    Ok(statements)
}

fn lower_statement(
    node: Node,
    source: &[u8],
    depth: usize,
    limit: usize,
) -> Result<Option<SyntaxNode>> {
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    let line = node.start_position().row + 1;

    let lowered = match node.kind() {
        "comment" => None,
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(definition) => lower_statement(definition, source, depth + 1, limit)?,
            None => None,
        },
        "function_definition" => {
            let name = field_text(node, "name", source).unwrap_or_else(|| "<anonymous>".into());
            let parameters = parameter_names(node, source);
            let body = lower_field_block(node, "body", source, depth + 1, limit)?;
            Some(SyntaxNode::function(name, line, parameters, body))
        }
        "class_definition" => {
            let name = field_text(node, "name", source).unwrap_or_else(|| "<anonymous>".into());
            let body = lower_field_block(node, "body", source, depth + 1, limit)?;
            Some(SyntaxNode::class_def(name, line, body))
        }
        "if_statement" => Some(lower_if(node, source, depth, limit)?),
        "for_statement" => {
            let mut body = lower_field_block(node, "body", source, depth + 1, limit)?;
            body.extend(lower_loop_else(node, source, depth, limit)?);
            Some(SyntaxNode::for_loop(line, body))
        }
        "while_statement" => {
            let mut body = lower_field_block(node, "body", source, depth + 1, limit)?;
            body.extend(lower_loop_else(node, source, depth, limit)?);
            Some(SyntaxNode::while_loop(line, body))
        }
        "try_statement" | "with_statement" | "match_statement" | "case_clause" => Some(
            SyntaxNode::other(line, lower_clauses(node, source, depth + 1, limit)?),
        ),
        _ => Some(SyntaxNode::statement(line)),
    };

    Ok(lowered)
}

fn lower_field_block(
    node: Node,
    field: &str,
    source: &[u8],
    depth: usize,
    limit: usize,
) -> Result<Vec<SyntaxNode>> {
    match node.child_by_field_name(field) {
        Some(block) => lower_block(block, source, depth, limit),
        None => Ok(Vec::new()),
    }
}

/// An `if` with `elif` clauses nests the way the else path executes: each
/// clause becomes an `If` wrapping whatever follows it, so the trailing
/// `else` ends up innermost.
fn lower_if(node: Node, source: &[u8], depth: usize, limit: usize) -> Result<SyntaxNode> {
    let line = node.start_position().row + 1;
    let body = lower_field_block(node, "consequence", source, depth + 1, limit)?;

    let clauses: Vec<Node> = node
        .children_by_field_name("alternative", &mut node.walk())
        .collect();

    let mut alternate = Vec::new();
    for clause in clauses.into_iter().rev() {
        match clause.kind() {
            "else_clause" => {
                alternate = lower_field_block(clause, "body", source, depth + 1, limit)?;
            }
            "elif_clause" => {
                let elif_line = clause.start_position().row + 1;
                let elif_body = lower_field_block(clause, "consequence", source, depth + 1, limit)?;
                alternate = vec![SyntaxNode::if_else(elif_line, elif_body, alternate)];
            }
            _ => {}
        }
    }

    Ok(SyntaxNode::if_else(line, body, alternate))
}

/// Python allows an `else` on loops; its statements run on the same nesting
/// level as the loop body, so they are lowered into it.
fn lower_loop_else(node: Node, source: &[u8], depth: usize, limit: usize) -> Result<Vec<SyntaxNode>> {
    match node.child_by_field_name("alternative") {
        Some(clause) => lower_field_block(clause, "body", source, depth + 1, limit),
        None => Ok(Vec::new()),
    }
}

/// Flatten a clause-bearing statement (try/with/match) into the statements of
/// its blocks, keeping except/else/finally/case clauses as `Other` containers.
fn lower_clauses(node: Node, source: &[u8], depth: usize, limit: usize) -> Result<Vec<SyntaxNode>> {
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    let mut out = Vec::new();
    for child in node.named_children(&mut node.walk()) {
        match child.kind() {
            "block" => out.extend(lower_block(child, source, depth + 1, limit)?),
            "except_clause" | "except_group_clause" | "finally_clause" | "else_clause" => {
                let clause_line = child.start_position().row + 1;
                out.push(SyntaxNode::other(
                    clause_line,
                    lower_clauses(child, source, depth + 1, limit)?,
                ));
            }
            _ => {}
        }
    }
    Ok(out)
}

fn field_text(node: Node, field: &str, source: &[u8]) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|child| child.utf8_text(source).ok())
        .map(str::to_string)
}

/// Ordered positional/keyword parameter names. Splat parameters and bare
/// separators are not counted, matching positional-parameter counting.
fn parameter_names(func: Node, source: &[u8]) -> Vec<String> {
    let Some(params) = func.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for param in params.named_children(&mut params.walk()) {
        match param.kind() {
            "identifier" => {
                if let Ok(text) = param.utf8_text(source) {
                    names.push(text.to_string());
                }
            }
            "typed_parameter" | "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = parameter_identifier(param, source) {
                    names.push(name);
                }
            }
            _ => {}
        }
    }
    names
}

fn parameter_identifier(param: Node, source: &[u8]) -> Option<String> {
    if let Some(name) = param.child_by_field_name("name") {
        return name.utf8_text(source).ok().map(str::to_string);
    }
    param
        .named_children(&mut param.walk())
        .find(|child| child.kind() == "identifier")
        .and_then(|child| child.utf8_text(source).ok())
        .map(str::to_string)
}
