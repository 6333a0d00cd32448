use thiserror::Error;

use crate::api::Diagnostic;
use crate::parser::token::Position;

/// Parser error with the position of the offending token.
///
/// Any parse error rejects the whole input: no partial statement list is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {position}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: Position,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Unexpected token
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Statement not followed by `;`
    #[error("expected ';' after statement, found {found}")]
    MissingTerminator { found: String },
    /// `a < b < c`, `a < b == c`, `a == b == c`, ...
    #[error("comparison operators cannot be chained, found '{op}' after a comparison")]
    ChainedComparison { op: String },
    /// Invalid number literal
    #[error("invalid number literal '{text}'")]
    InvalidNumber { text: String },
    /// Bracket literal outside of an `in` test
    #[error("array literal is only allowed after 'in'")]
    ArrayOutsideMembership,
    /// Maximum nesting depth exceeded
    #[error("expression nesting depth {depth} exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => "P001",
            ParseErrorKind::MissingTerminator { .. } => "P002",
            ParseErrorKind::ChainedComparison { .. } => "P003",
            ParseErrorKind::InvalidNumber { .. } => "P004",
            ParseErrorKind::ArrayOutsideMembership => "P005",
            ParseErrorKind::MaxDepthExceeded { .. } => "P006",
        }
    }

    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::UnexpectedToken { .. } => None,
            ParseErrorKind::MissingTerminator { .. } => Some("Terminate each statement with ';'"),
            ParseErrorKind::ChainedComparison { .. } => {
                Some("Combine comparisons with '&&' or '||', e.g. 'a < b && b < c'")
            }
            ParseErrorKind::InvalidNumber { .. } => {
                Some("Integer literals must fit in a signed 64-bit integer")
            }
            ParseErrorKind::ArrayOutsideMembership => {
                Some("Use the literal list in a membership test, e.g. 'x in [1, 2]'")
            }
            ParseErrorKind::MaxDepthExceeded { .. } => {
                Some("Reduce nesting or simplify the expression")
            }
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.kind.to_string(),
            position: self.position,
            help: self.help().map(str::to_string),
            code: Some(self.code().to_string()),
        }
    }
}
