//! Public API for the calc expression language.
//!
//! This module provides the stable public API for parsing and running calc
//! programs:
//!
//! 1. **Engine**: parse a whole program and run it against an [`Environment`]
//! 2. **Environment**: the caller-owned variable bindings
//! 3. **ConditionResolver**: a pluggable source for names the environment does
//!    not bind
//!
//! # Example
//!
//! ```
//! use calc_core::api::{ConditionResolver, Engine, EngineOptions, Environment, ResolveError};
//!
//! struct Conditions;
//!
//! impl ConditionResolver for Conditions {
//!     type Context = ();
//!
//!     fn resolve(&self, name: &str, _: &()) -> Result<Option<i64>, ResolveError> {
//!         Ok(match name {
//!             "charge" => Some(500),
//!             "age" => Some(20),
//!             _ => None,
//!         })
//!     }
//! }
//!
//! let engine = Engine::with_resolver(EngineOptions::default(), &Conditions, &());
//! let mut env = Environment::new();
//! assert_eq!(engine.eval("charge>=200 && age<=30", &mut env).unwrap(), 1);
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod options;
pub mod resolver;

pub use engine::Engine;
pub use environment::Environment;
pub use error::{Diagnostic, Error};
pub use options::{EngineOptions, EvaluatorOptions, ParseOptions};
pub use resolver::{ConditionResolver, NoResolver, ResolveError};
