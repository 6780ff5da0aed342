//! Tree-walking interpreter.
//!
//! Node results:
//!
//! | Node        | Result                                                |
//! |-------------|-------------------------------------------------------|
//! | `Literal`   | its value                                             |
//! | `Binary`    | left, then right, then the operator (no short-circuit) |
//! | `VarRef`    | current value, 0 if unset                             |
//! | `VarAssign` | 0, after storing the value                            |
//! | `Block`     | 0, after each statement in order                      |
//! | `If`        | body result if condition > 0, else 1                  |

use brim_ir::{Expr, ExprKind};
use brim_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::{evaluate_binary, Environment, EvalResult};

/// Evaluator over a borrowed environment.
///
/// The environment outlives the evaluator, so bindings made by one run are
/// visible to the caller afterwards, including those made before an error.
pub struct Evaluator<'env> {
    env: &'env mut Environment,
}

impl<'env> Evaluator<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Evaluator { env }
    }

    pub fn environment(&self) -> &Environment {
        self.env
    }

    /// Evaluate `expr`, applying its assignments to the environment.
    #[tracing::instrument(level = "trace", skip_all, fields(span = ?expr.span))]
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(*value),
            ExprKind::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, left, right, expr.span)
            }
            ExprKind::VarRef { name } => Ok(self.env.get(name)),
            ExprKind::VarAssign { name, value } => {
                let value = self.eval(value)?;
                let previous = self.env.assign(name, value);
                debug!(name = %name, value, ?previous, "assign");
                Ok(0)
            }
            ExprKind::Block(statements) => {
                for statement in statements {
                    self.eval(statement)?;
                }
                Ok(0)
            }
            ExprKind::If { condition, body } => {
                if self.eval(condition)? > 0 {
                    self.eval(body)
                } else {
                    Ok(1)
                }
            }
        }
    }
}

/// Evaluate `expr` against `env`.
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult {
    Evaluator::new(env).eval(expr)
}
