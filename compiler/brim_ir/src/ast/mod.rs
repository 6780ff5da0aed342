//! Owned AST types.
//!
//! The grammar is fixed and small, so the tree is a closed enum matched
//! exhaustively by the evaluator rather than a set of trait objects.
//!
//! # Module Structure
//!
//! - `mod.rs`: `Expr` and `ExprKind`
//! - `operators.rs`: `BinaryOp`

mod operators;

pub use operators::BinaryOp;

use crate::Span;
use brim_stack::ensure_sufficient_stack;
use std::fmt;

/// An AST node with its source span.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Integer literal node.
    pub fn literal(value: i64, span: Span) -> Self {
        Expr::new(ExprKind::Literal(value), span)
    }

    /// Binary node; the span covers both operands.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let span = left.span.merge(right.span);
        Expr::new(
            ExprKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match &expr.kind {
                ExprKind::Literal(_) | ExprKind::VarRef { .. } => {}
                ExprKind::Binary { left, right, .. } => pending.extend([&**left, &**right]),
                ExprKind::VarAssign { value, .. } => pending.push(value),
                ExprKind::Block(statements) => pending.extend(statements),
                ExprKind::If { condition, body } => pending.extend([&**condition, &**body]),
            }
        }
        count
    }

    /// Move every direct child of `self` into `out`, leaving leaves behind.
    fn take_children(&mut self, out: &mut Vec<Expr>) {
        match &mut self.kind {
            ExprKind::Literal(_) | ExprKind::VarRef { .. } => {}
            ExprKind::Binary { left, right, .. } => out.extend([take(left), take(right)]),
            ExprKind::VarAssign { value, .. } => out.push(take(value)),
            ExprKind::Block(statements) => out.append(statements),
            ExprKind::If { condition, body } => out.extend([take(condition), take(body)]),
        }
    }
}

/// Replace `child` with a leaf and return the old subtree.
fn take(child: &mut Expr) -> Expr {
    std::mem::replace(child, Expr::literal(0, Span::DUMMY))
}

/// Iterative drop. A flat `1+1+...` chain is one level deep per operator.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.take_children(&mut pending);
        }
    }
}

/// Node variants.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// Constant integer.
    Literal(i64),
    /// `left op right`; both operands are always present.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Read of a variable's current value.
    VarRef { name: String },
    /// `name = value ;`
    VarAssign { name: String, value: Box<Expr> },
    /// Statements executed in order.
    Block(Vec<Expr>),
    /// `if (condition) { body }`; `body` is always a `Block`.
    If {
        condition: Box<Expr>,
        body: Box<Expr>,
    },
}

/// Fully parenthesized rendering, e.g. `(+ 2 (* 3 4))`.
///
/// Blocks render as `{s1 s2 ...}`; used by tests and debug logging to
/// compare tree shapes without spans.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_node(f))
    }
}

impl Expr {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Literal(value) => write!(f, "{value}"),
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            ExprKind::VarRef { name } => f.write_str(name),
            ExprKind::VarAssign { name, value } => write!(f, "(= {name} {value})"),
            ExprKind::Block(statements) => {
                f.write_str("{")?;
                for (i, statement) in statements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{statement}")?;
                }
                f.write_str("}")
            }
            ExprKind::If { condition, body } => write!(f, "(if {condition} {body})"),
        }
    }
}
