//! Duplication count: repeated line-number attributions among the statements
//! of a function body.
//!
//! This measures statements sharing a line attribution (multi-statement
//! lines, or attribution bugs upstream), not true code clones.

use crate::core::ast::{NodeKind, SyntaxNode};
use crate::core::errors::{Error, Result};
use crate::metrics::DEFAULT_RECURSION_LIMIT;
use std::collections::HashSet;

pub fn calculate_duplication(node: &SyntaxNode) -> Result<u32> {
    calculate_duplication_with_limit(node, DEFAULT_RECURSION_LIMIT)
}

pub fn calculate_duplication_with_limit(node: &SyntaxNode, limit: usize) -> Result<u32> {
    if node.kind != NodeKind::Function {
        return Ok(0);
    }

    let mut lines = Vec::new();
    collect_statement_lines(node, 0, limit, &mut lines)?;

    let distinct: HashSet<usize> = lines.iter().copied().collect();
    Ok((lines.len() - distinct.len()) as u32)
}

/// Gather the line of every statement-kind node in the subtree, the function
/// node itself included.
fn collect_statement_lines(
    node: &SyntaxNode,
    depth: usize,
    limit: usize,
    lines: &mut Vec<usize>,
) -> Result<()> {
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    if node.kind.is_statement() {
        lines.push(node.line);
    }

    for child in node.children() {
        collect_statement_lines(child, depth + 1, limit, lines)?;
    }

    Ok(())
}
