//! The calc engine: parse a whole program and run it against an environment.

use super::{ConditionResolver, EngineOptions, Environment, Error, NoResolver};
use crate::evaluator::Evaluator;
use crate::parser::{self, ParseError, Statement};

/// Parses and runs calc programs with a fixed configuration and an optional
/// condition resolver.
///
/// # Lifetimes
///
/// - `'r`: Lifetime of the resolver and its context. The engine borrows both.
///
/// # Example
///
/// ```
/// use calc_core::api::{Engine, EngineOptions, Environment};
///
/// let engine = Engine::new(EngineOptions::default());
/// let mut env = Environment::new();
///
/// let result = engine.eval("var a = 1; var b = a > 10 ? a : 10; a + b", &mut env).unwrap();
/// assert_eq!(result, 11);
/// assert_eq!(env.get("b"), Some(10));
/// ```
pub struct Engine<'r, R: ConditionResolver + ?Sized = NoResolver> {
    options: EngineOptions,
    resolver: Option<(&'r R, &'r R::Context)>,
}

impl Engine<'static, NoResolver> {
    /// Create an engine without a condition resolver.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            resolver: None,
        }
    }
}

impl<'r, R: ConditionResolver + ?Sized> Engine<'r, R> {
    /// Create an engine that asks `resolver` for identifiers the environment
    /// does not bind, passing `context` along on every lookup.
    pub fn with_resolver(
        options: EngineOptions,
        resolver: &'r R,
        context: &'r R::Context,
    ) -> Self {
        Self {
            options,
            resolver: Some((resolver, context)),
        }
    }

    /// Access the engine options.
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Parse a program using the engine's parse options.
    pub fn parse(&self, source: &str) -> Result<Vec<Statement>, ParseError> {
        parser::parse_with_max_depth(source, self.options.parse.max_depth)
    }

    /// Parse and run `source`, returning the value of the last statement
    /// (0 for an empty program).
    ///
    /// Nothing runs if the text fails to parse. Execution stops at the first
    /// failing statement; earlier statements keep their effect on `env`.
    pub fn eval(&self, source: &str, env: &mut Environment) -> Result<i64, Error> {
        let program = self.parse(source).map_err(|e| Error::parse(&e, source))?;
        self.run(&program, env)
    }

    /// Run already parsed statements in order.
    pub fn run(&self, program: &[Statement], env: &mut Environment) -> Result<i64, Error> {
        let mut evaluator = self.evaluator();
        let mut last = 0;
        for (statement, stmt) in program.iter().enumerate() {
            last = evaluator
                .eval_statement(stmt, env)
                .map_err(|error| Error::Evaluation { statement, error })?
                .value();
        }
        Ok(last)
    }

    fn evaluator(&self) -> Evaluator<'r, R> {
        Evaluator::from_parts(self.options.evaluation.clone(), self.resolver)
    }
}
