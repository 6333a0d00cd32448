//! Tree-walking evaluator for calc programs.
//!
//! The evaluator walks parsed statements and expressions, producing `i64`
//! results and mutating the caller's [`Environment`].
//!
//! ## Design Principles
//!
//! - **Never panic**: division by zero and overflow are handled, resolver
//!   panics are contained
//! - **Stack-safe**: operator chains are folded with a loop, and depth tracking
//!   bounds the remaining recursion (parentheses, unary operators, ternaries)
//! - **Lazy**: `&&`, `||` and `? :` only evaluate the operands they need
//!
//! ## Example
//!
//! ```
//! use calc_core::api::Environment;
//! use calc_core::{evaluator, parser};
//!
//! let program = parser::parse("var a = 16; a > 20 ? 1 : 2").unwrap();
//! let mut env = Environment::new();
//! assert_eq!(evaluator::evaluate(&program[0], &mut env).unwrap(), "Assign 16 to a");
//! assert_eq!(evaluator::evaluate(&program[1], &mut env).unwrap(), "2");
//! ```

mod error;
mod eval;
mod operators;


pub use error::EvalError;
pub use eval::{Evaluator, StatementOutcome};

use crate::{
    api::{Environment, EvaluatorOptions},
    parser::{Expr, Statement},
};

/// Execute a statement without a condition resolver, returning the textual
/// outcome: the decimal value of an expression, or `Assign <value> to <name>`
/// for a `var` statement.
pub fn evaluate(statement: &Statement, env: &mut Environment) -> Result<String, EvalError> {
    Evaluator::new(EvaluatorOptions::default())
        .eval_statement(statement, env)
        .map(|outcome| outcome.to_string())
}

/// Evaluate an expression without a condition resolver.
pub fn evaluate_expr(expr: &Expr, env: &mut Environment) -> Result<i64, EvalError> {
    Evaluator::new(EvaluatorOptions::default()).eval_expr(expr, env)
}
