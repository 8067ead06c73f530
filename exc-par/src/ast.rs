//! AST node definitions — spec.md §3.
//!
//! A single tagged node with optional child slots, reusing `TokenKind` as
//! the discriminator rather than a parallel node-kind enum: every internal
//! node is one of the operator kinds, and every leaf is `Int` or `Id`
//! (spec.md §9's "polymorphic tree nodes" note).

use exc_lex::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: TokenKind,
    pub lexeme: String,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self { kind, lexeme: lexeme.into(), left: None, right: None }
    }

    pub fn unary_right(kind: TokenKind, lexeme: impl Into<String>, right: Node) -> Self {
        Self { kind, lexeme: lexeme.into(), left: None, right: Some(Box::new(right)) }
    }

    pub fn binary(kind: TokenKind, lexeme: impl Into<String>, left: Node, right: Node) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Unwraps parentheses-transparent identity: for this grammar a node is
    /// only ever returned whole by `factor`'s `(...)` production, which
    /// already discards the parens themselves, so "unwrapping" is simply
    /// looking at the node as parsed. Kept as a named predicate because
    /// spec.md §9 calls out that assignability must be checked against this
    /// post-unwrap root, not any sub-node.
    pub fn is_assignable(&self) -> bool {
        self.kind == TokenKind::Id
    }

    /// True if any node in this subtree is an identifier leaf — the
    /// divide-by-zero rule (spec.md §4.4) only fires when the divisor
    /// subtree contains none.
    pub fn contains_id(&self) -> bool {
        self.kind == TokenKind::Id
            || self.left.as_deref().is_some_and(Node::contains_id)
            || self.right.as_deref().is_some_and(Node::contains_id)
    }
}
