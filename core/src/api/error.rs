//! Public error types for the calc API.
//!
//! Parse errors are converted to diagnostics at the API boundary; evaluation
//! errors keep their typed form together with the index of the failing
//! statement.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::{ParseError, Position};

/// Public error type for engine operations.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The program text was rejected. No statement was executed.
    #[error("parse error: {}", .diagnostic.message)]
    Parse { diagnostic: Diagnostic, src: String },

    /// A statement failed. Environment changes made by earlier statements
    /// remain in effect.
    #[error("evaluation failed in statement {statement}: {error}")]
    Evaluation { statement: usize, error: EvalError },
}

impl Error {
    pub(crate) fn parse(err: &ParseError, src: &str) -> Self {
        Error::Parse {
            diagnostic: err.to_diagnostic(),
            src: src.to_string(),
        }
    }
}

/// An error message with source location, help text, and code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the issue.
    pub position: Position,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}
