//! Engine of the calc expression language: scanner, parser, AST, and
//! tree-walking evaluator over `i64` values.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod syntax;
