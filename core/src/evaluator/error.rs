//! Runtime evaluation errors.
//!
//! # Error Categories
//!
//! - **Runtime errors**: recoverable faults of a single evaluation
//!   (undefined variable, division by zero). The environment keeps every
//!   change made before the fault.
//!
//! - **Resource exceeded errors**: the evaluation depth limit was hit.

use thiserror::Error;

use crate::parser::BinaryOp;

/// Runtime evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The identifier is bound neither in the environment nor by the resolver.
    #[error("undefined variable: {name}")]
    UndefinedVariable { name: String },

    /// Integer division or remainder with a zero divisor.
    #[error("division by zero in '{op}'")]
    DivisionByZero { op: BinaryOp },

    /// Evaluation recursion depth exceeded.
    #[error("evaluation stack overflow: depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

impl EvalError {
    /// Whether the error is an ordinary runtime fault rather than resource
    /// exhaustion.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, EvalError::StackOverflow { .. })
    }
}
