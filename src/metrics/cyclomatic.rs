//! Cyclomatic complexity: a count-based proxy for the number of independent
//! execution paths through a subtree.

use crate::core::ast::{NodeKind, SyntaxNode};
use crate::core::errors::{Error, Result};
use crate::metrics::DEFAULT_RECURSION_LIMIT;

pub fn calculate_cyclomatic(node: &SyntaxNode) -> Result<u32> {
    calculate_cyclomatic_with_limit(node, DEFAULT_RECURSION_LIMIT)
}

pub fn calculate_cyclomatic_with_limit(node: &SyntaxNode, limit: usize) -> Result<u32> {
    visit(node, 0, limit)
}

fn visit(node: &SyntaxNode, depth: usize, limit: usize) -> Result<u32> {
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    // Every node contributes its own path.
    let mut complexity = 1u32;

    match node.kind {
        // An else branch adds one path per statement it holds, not a flat
        // branch bonus.
        NodeKind::If => complexity += node.alternate.len() as u32,
        NodeKind::For | NodeKind::While => complexity += 1,
        _ => {}
    }

    for child in node.children() {
        complexity += visit(child, depth + 1, limit)?;
    }

    Ok(complexity)
}
