//! Code length: source lines spanned by a function or class definition.

use crate::core::ast::{NodeKind, SyntaxNode};

/// Lines from the definition to its last body statement, inclusive.
///
/// Non-definition nodes span 0. An empty body spans 1 (a single-line
/// definition); a last statement attributed before the definition line is
/// treated the same way rather than underflowing.
pub fn calculate_length(node: &SyntaxNode) -> u32 {
    match node.kind {
        NodeKind::Function | NodeKind::Class => node
            .body
            .last()
            .map(|last| last.line.saturating_sub(node.line) as u32 + 1)
            .unwrap_or(1),
        _ => 0,
    }
}
