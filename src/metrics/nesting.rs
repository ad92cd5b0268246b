//! Function complexity: parameter count plus nesting depth of function
//! definitions nested directly inside one another.

use crate::core::ast::{NodeKind, SyntaxNode};
use crate::core::errors::{Error, Result};
use crate::metrics::DEFAULT_RECURSION_LIMIT;

pub fn calculate_function_complexity(node: &SyntaxNode) -> Result<u32> {
    calculate_function_complexity_with_limit(node, DEFAULT_RECURSION_LIMIT)
}

pub fn calculate_function_complexity_with_limit(node: &SyntaxNode, limit: usize) -> Result<u32> {
    visit(node, 0, limit)
}

fn visit(node: &SyntaxNode, depth: usize, limit: usize) -> Result<u32> {
    if node.kind != NodeKind::Function {
        return Ok(0);
    }
    if depth >= limit {
        return Err(Error::RecursionLimit { limit });
    }

    // Only function definitions sitting directly in this body deepen the
    // nesting; a function with none has depth 0.
    let mut nesting_depth = 0u32;
    for child in node.body.iter().filter(|c| c.kind == NodeKind::Function) {
        nesting_depth = nesting_depth.max(visit(child, depth + 1, limit)?);
    }

    Ok(node.parameters.len() as u32 + nesting_depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn non_function_nodes_score_zero() {
        assert_eq!(
            calculate_function_complexity(&SyntaxNode::module(vec![])).unwrap(),
            0
        );
        assert_eq!(
            calculate_function_complexity(&SyntaxNode::class_def("C", 1, vec![])).unwrap(),
            0
        );
        assert_eq!(
            calculate_function_complexity(&SyntaxNode::statement(1)).unwrap(),
            0
        );
    }

    #[test]
    fn flat_function_scores_its_parameter_count() {
        let func = SyntaxNode::function(
            "connect",
            1,
            vec!["host".into(), "port".into(), "timeout".into()],
            vec![SyntaxNode::statement(2)],
        );
        assert_eq!(calculate_function_complexity(&func).unwrap(), 3);
    }

    #[test]
    fn parameterless_function_with_no_nesting_scores_zero() {
        let func = SyntaxNode::function("tick", 1, vec![], vec![SyntaxNode::statement(2)]);
        assert_eq!(calculate_function_complexity(&func).unwrap(), 0);
    }

    #[test]
    fn nested_definitions_deepen_the_score() {
        let inner = SyntaxNode::function(
            "inner",
            3,
            vec!["x".into(), "y".into()],
            vec![SyntaxNode::statement(4)],
        );
        let outer = SyntaxNode::function("outer", 1, vec!["a".into()], vec![inner]);
        // 1 parameter + max(inner = 2 parameters + 0)
        assert_eq!(calculate_function_complexity(&outer).unwrap(), 3);
    }

    #[test]
    fn nesting_takes_the_maximum_sibling() {
        let shallow = SyntaxNode::function("shallow", 2, vec!["x".into()], vec![]);
        let deep = SyntaxNode::function(
            "deep",
            5,
            vec![],
            vec![SyntaxNode::function(
                "deeper",
                6,
                vec!["p".into(), "q".into(), "r".into()],
                vec![],
            )],
        );
        let outer = SyntaxNode::function("outer", 1, vec![], vec![shallow, deep]);
        // max(shallow = 1, deep = 0 + 3) = 3
        assert_eq!(calculate_function_complexity(&outer).unwrap(), 3);
    }

    #[test]
    fn functions_behind_other_statements_do_not_nest() {
        // The nested definition sits inside an if, not directly in the body.
        let hidden = SyntaxNode::if_else(
            2,
            vec![SyntaxNode::function("hidden", 3, vec!["x".into()], vec![])],
            vec![],
        );
        let outer = SyntaxNode::function("outer", 1, vec!["a".into()], vec![hidden]);
        assert_eq!(calculate_function_complexity(&outer).unwrap(), 1);
    }

    #[test]
    fn depth_limit_is_enforced() {
        let mut node = SyntaxNode::function("f0", 1, vec![], vec![]);
        for i in 1..50 {
            node = SyntaxNode::function(format!("f{i}"), i + 1, vec![], vec![node]);
        }

        let err = calculate_function_complexity_with_limit(&node, 8).unwrap_err();
        assert!(matches!(err, Error::RecursionLimit { limit: 8 }));
    }
}
