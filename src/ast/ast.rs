use std::fmt::Display;

use crate::lexer::tokens::{Token, TokenKind};

/// Number of spaces added per nesting level when displaying a subtree.
pub const INDENT_STEP: usize = 2;

/// A node of the abstract syntax tree.
///
/// The set of node kinds is closed: the parser produces exactly these
/// variants and the display logic matches exhaustively over them. Every
/// variant carries the source line at which it was recognized, used only
/// for diagnostics. Children are owned by their parent, so the tree is a
/// strict rooted tree with no sharing. Nodes are built bottom-up during
/// parsing and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// A whole program: statements in order of appearance.
    Prog {
        line: u32,
        statements: Vec<SyntaxNode>,
    },
    /// A declaration-style binding. The statement grammar currently emits
    /// `BinOp` with an `Assign` operator instead, but the kind stays in
    /// the model for downstream consumers.
    Val {
        line: u32,
        name: Token,
        rhs: Box<SyntaxNode>,
    },
    /// A binary arithmetic, logical, or assignment operation.
    BinOp {
        line: u32,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
        op: TokenKind,
    },
    /// A relational comparison.
    RelOp {
        line: u32,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
        op: TokenKind,
    },
    /// A unary operation (currently only `not`).
    UnaryOp {
        line: u32,
        operand: Box<SyntaxNode>,
        op: TokenKind,
    },
    /// A leaf: literal or identifier reference.
    Token { line: u32, token: Token },
}

impl SyntaxNode {
    /// Returns the source line at which this node was recognized.
    pub fn line(&self) -> u32 {
        match self {
            SyntaxNode::Prog { line, .. }
            | SyntaxNode::Val { line, .. }
            | SyntaxNode::BinOp { line, .. }
            | SyntaxNode::RelOp { line, .. }
            | SyntaxNode::UnaryOp { line, .. }
            | SyntaxNode::Token { line, .. } => *line,
        }
    }

    /// Renders this subtree into `out` as an indented hierarchy, one node
    /// per line, children indented by [`INDENT_STEP`]. Purely a debugging
    /// aid; performs no semantic computation.
    pub fn display_subtree(&self, indent: usize, out: &mut String) {
        match self {
            SyntaxNode::Prog { statements, .. } => {
                print_indented("Prog(", indent, out);
                for stmt in statements {
                    stmt.display_subtree(indent + INDENT_STEP, out);
                }
                print_indented(")", indent, out);
            }
            SyntaxNode::Val { name, rhs, .. } => {
                print_indented(&format!("Val[{}](", name.value), indent, out);
                rhs.display_subtree(indent + INDENT_STEP, out);
                print_indented(")", indent, out);
            }
            SyntaxNode::BinOp {
                left, right, op, ..
            } => {
                print_indented(&format!("BinOp[{}](", op), indent, out);
                left.display_subtree(indent + INDENT_STEP, out);
                right.display_subtree(indent + INDENT_STEP, out);
                print_indented(")", indent, out);
            }
            SyntaxNode::RelOp {
                left, right, op, ..
            } => {
                print_indented(&format!("RelOp[{}](", op), indent, out);
                left.display_subtree(indent + INDENT_STEP, out);
                right.display_subtree(indent + INDENT_STEP, out);
                print_indented(")", indent, out);
            }
            SyntaxNode::UnaryOp { operand, op, .. } => {
                print_indented(&format!("UnaryOp[{}](", op), indent, out);
                operand.display_subtree(indent + INDENT_STEP, out);
                print_indented(")", indent, out);
            }
            SyntaxNode::Token { token, .. } => {
                print_indented(&format!("Token({})", token.value), indent, out);
            }
        }
    }
}

fn print_indented(text: &str, indent: usize, out: &mut String) {
    out.push_str(&" ".repeat(indent));
    out.push_str(text);
    out.push('\n');
}

/// The completed tree produced by a successful parse.
///
/// Owns the root node and re-exposes it for downstream consumers
/// (an evaluator or type checker would walk it from here).
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    root: SyntaxNode,
}

impl SyntaxTree {
    pub fn new(root: SyntaxNode) -> Self {
        SyntaxTree { root }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = String::new();
        self.root.display_subtree(0, &mut out);
        write!(f, "{}", out)
    }
}
