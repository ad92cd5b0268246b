//! The metrics engine: four independent tree-traversal calculators and the
//! aggregator that assembles their results.

pub mod cyclomatic;
pub mod duplication;
pub mod length;
pub mod nesting;

pub use cyclomatic::{calculate_cyclomatic, calculate_cyclomatic_with_limit};
pub use duplication::{calculate_duplication, calculate_duplication_with_limit};
pub use length::calculate_length;
pub use nesting::{calculate_function_complexity, calculate_function_complexity_with_limit};

use crate::core::ast::SyntaxNode;
use crate::core::errors::{Error, Result};
use crate::core::{DefinitionMetrics, MetricsSet};

/// Depth bound applied to every recursive traversal unless the caller
/// supplies its own.
pub const DEFAULT_RECURSION_LIMIT: usize = 512;

/// Compute the four metrics against the tree root.
///
/// Each calculator runs exactly once, against the root node. Applied to a
/// module root this trivializes `code_length` and `function_complexity` (a
/// module is neither a function nor a class); [`analyze_definitions`] is the
/// per-definition counterpart.
pub fn analyze(root: &SyntaxNode) -> Result<MetricsSet> {
    analyze_with_limit(root, DEFAULT_RECURSION_LIMIT)
}

pub fn analyze_with_limit(root: &SyntaxNode, limit: usize) -> Result<MetricsSet> {
    Ok(MetricsSet {
        cyclomatic_complexity: calculate_cyclomatic_with_limit(root, limit)?,
        code_duplication: calculate_duplication_with_limit(root, limit)?,
        code_length: calculate_length(root),
        function_complexity: calculate_function_complexity_with_limit(root, limit)?,
    })
}

/// Compute the four metrics against every function and class definition in
/// the tree, in pre-order.
pub fn analyze_definitions(root: &SyntaxNode) -> Result<Vec<DefinitionMetrics>> {
    analyze_definitions_with_limit(root, DEFAULT_RECURSION_LIMIT)
}

pub fn analyze_definitions_with_limit(
    root: &SyntaxNode,
    limit: usize,
) -> Result<Vec<DefinitionMetrics>> {
    let mut definitions = Vec::new();
    collect_definitions(root, 0, limit, &mut definitions)?;
    Ok(definitions)
}

fn collect_definitions(
    node: &SyntaxNode,
    depth: usize,
    limit: usize,
    definitions: &mut Vec<DefinitionMetrics>,
) -> Result<()> {
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    if node.kind.is_definition() {
        definitions.push(DefinitionMetrics {
            name: node
                .name
                .clone()
                .unwrap_or_else(|| "<anonymous>".to_string()),
            line: node.line,
            metrics: analyze_with_limit(node, limit)?,
        });
    }

    for child in node.children() {
        collect_definitions(child, depth + 1, limit, definitions)?;
    }

    Ok(())
}
