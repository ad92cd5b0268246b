//! The syntax tree the metric calculators traverse.
//!
//! The tree is produced once per run by a language analyzer, read-only for
//! the whole engine invocation, and discarded after the metrics are built.

/// One syntactic construct in a parsed source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub name: Option<String>,
    /// 1-based source line where the construct begins.
    pub line: usize,
    /// Ordered parameter names; empty unless this is a `Function`.
    pub parameters: Vec<String>,
    /// Ordered statement children, in source order.
    pub body: Vec<SyntaxNode>,
    /// Statements on the else path; empty unless this is an `If`.
    pub alternate: Vec<SyntaxNode>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    Function,
    Class,
    If,
    For,
    While,
    Statement,
    Other,
}

impl NodeKind {
    /// Whether nodes of this kind stand in statement position.
    ///
    /// Definitions, branches, and loops are statements too; only the module
    /// root and expression-level `Other` containers are excluded.
    pub fn is_statement(self) -> bool {
        !matches!(self, NodeKind::Module | NodeKind::Other)
    }

    pub fn is_definition(self) -> bool {
        matches!(self, NodeKind::Function | NodeKind::Class)
    }
}

impl SyntaxNode {
    pub fn module(body: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Module,
            name: None,
            line: 1,
            parameters: Vec::new(),
            body,
            alternate: Vec::new(),
        }
    }

    pub fn function(
        name: impl Into<String>,
        line: usize,
        parameters: Vec<String>,
        body: Vec<SyntaxNode>,
    ) -> Self {
        Self {
            kind: NodeKind::Function,
            name: Some(name.into()),
            line,
            parameters,
            body,
            alternate: Vec::new(),
        }
    }

    pub fn class_def(name: impl Into<String>, line: usize, body: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Class,
            name: Some(name.into()),
            line,
            parameters: Vec::new(),
            body,
            alternate: Vec::new(),
        }
    }

    pub fn if_else(line: usize, body: Vec<SyntaxNode>, alternate: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::If,
            name: None,
            line,
            parameters: Vec::new(),
            body,
            alternate,
        }
    }

    pub fn for_loop(line: usize, body: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::For,
            name: None,
            line,
            parameters: Vec::new(),
            body,
            alternate: Vec::new(),
        }
    }

    pub fn while_loop(line: usize, body: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::While,
            name: None,
            line,
            parameters: Vec::new(),
            body,
            alternate: Vec::new(),
        }
    }

    pub fn statement(line: usize) -> Self {
        Self {
            kind: NodeKind::Statement,
            name: None,
            line,
            parameters: Vec::new(),
            body: Vec::new(),
            alternate: Vec::new(),
        }
    }

    pub fn other(line: usize, body: Vec<SyntaxNode>) -> Self {
        Self {
            kind: NodeKind::Other,
            name: None,
            line,
            parameters: Vec::new(),
            body,
            alternate: Vec::new(),
        }
    }

    /// Iterate the immediate children: the body statements followed by the
    /// else-path statements, which is source order.
    pub fn children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.body.iter().chain(self.alternate.iter())
    }

    pub fn child_count(&self) -> usize {
        self.body.len() + self.alternate.len()
    }
}
