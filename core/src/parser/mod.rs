pub mod error;
pub mod lexer;
mod parsed_expr;
pub mod parser;
mod syntax;
pub mod token;

pub use error::{ParseError, ParseErrorKind};
pub use lexer::Scanner;
pub use parsed_expr::{Expr, LiteralSet, Statement};
pub use parser::{DEFAULT_MAX_DEPTH, parse, parse_with_max_depth};
pub use syntax::{BinaryOp, BoolOp, UnaryOp};
pub use token::{Position, Token, TokenKind};

#[cfg(test)]
mod lexer_test;

#[cfg(test)]
mod parse_test;
