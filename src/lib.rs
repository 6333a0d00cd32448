//! Calc - A small, embeddable integer expression language
//!
//! # Overview
//!
//! Calc evaluates short programs of integer expressions and variable
//! definitions against a host-owned environment. Common use cases include:
//!
//! - Eligibility and pricing conditions
//! - Feature flags and conditional logic
//! - Business rules engines
//!
//! Every value is a signed 64-bit integer. Comparisons and logical operators
//! yield `1` or `0`, and any non-zero value counts as true.
//!
//! # Quick Start
//!
//! ```
//! use calc::{Engine, EngineOptions, Environment};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let mut env = Environment::new();
//! env.set("a", 16);
//!
//! assert_eq!(engine.eval("a > 20 ? 1 : 2", &mut env).unwrap(), 2);
//! assert_eq!(engine.eval("var b = a * 2; b in [16, 32]", &mut env).unwrap(), 1);
//! assert_eq!(env.get("b"), Some(32));
//! ```
//!
//! # Condition Resolvers
//!
//! Names the environment does not bind can be supplied on demand by a
//! [`ConditionResolver`]:
//!
//! ```
//! use calc::{ConditionResolver, Engine, EngineOptions, Environment, ResolveError};
//!
//! struct Order {
//!     charge: i64,
//! }
//!
//! struct OrderConditions;
//!
//! impl ConditionResolver for OrderConditions {
//!     type Context = Order;
//!
//!     fn resolve(&self, name: &str, order: &Order) -> Result<Option<i64>, ResolveError> {
//!         Ok((name == "charge").then_some(order.charge))
//!     }
//! }
//!
//! let order = Order { charge: 500 };
//! let engine = Engine::with_resolver(EngineOptions::default(), &OrderConditions, &order);
//! let mut env = Environment::new();
//! assert_eq!(engine.eval("charge >= 200", &mut env).unwrap(), 1);
//! ```

mod error_renderer;

// Re-export public API from calc_core
pub use calc_core::api::{
    ConditionResolver, Diagnostic, Engine, EngineOptions, Environment, Error, EvaluatorOptions,
    NoResolver, ParseOptions, ResolveError,
};

// Re-export the language front end
pub use calc_core::parser::{
    self, BinaryOp, BoolOp, Expr, ParseError, ParseErrorKind, Position, Scanner, Statement, Token,
    TokenKind, UnaryOp, parse,
};

// Re-export the evaluator
pub use calc_core::evaluator::{
    self, EvalError, Evaluator, StatementOutcome, evaluate, evaluate_expr,
};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
