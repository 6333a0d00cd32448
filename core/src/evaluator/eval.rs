//! Core evaluation logic.

use core::fmt;
use std::panic::{self, AssertUnwindSafe};

use smallvec::SmallVec;

use crate::{
    api::{ConditionResolver, Environment, EvaluatorOptions, NoResolver},
    evaluator::{
        EvalError,
        operators::{eval_binary, eval_unary, from_bool},
    },
    parser::{BinaryOp, BoolOp, Expr, LiteralSet, Statement},
};

/// Result of executing one statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    /// An expression statement produced a value.
    Value(i64),
    /// A `var` statement bound `value` to `name`.
    Assigned { name: String, value: i64 },
}

impl StatementOutcome {
    pub fn value(&self) -> i64 {
        match self {
            StatementOutcome::Value(value) | StatementOutcome::Assigned { value, .. } => *value,
        }
    }
}

impl fmt::Display for StatementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementOutcome::Value(value) => write!(f, "{value}"),
            StatementOutcome::Assigned { name, value } => write!(f, "Assign {value} to {name}"),
        }
    }
}

/// One step up the left spine of an operator chain.
#[derive(Clone, Copy)]
enum Link<'a> {
    Binary(BinaryOp, &'a Expr),
    Logic(BoolOp, &'a Expr),
    In(&'a LiteralSet),
}

/// Tree-walking evaluator over parsed statements.
///
/// Identifiers are looked up in the environment first. Names it does not bind
/// are handed to the configured [`ConditionResolver`] together with the
/// context given at construction.
pub struct Evaluator<'r, R: ConditionResolver + ?Sized = NoResolver> {
    options: EvaluatorOptions,
    resolver: Option<(&'r R, &'r R::Context)>,
    depth: usize,
}

impl Evaluator<'static, NoResolver> {
    /// Create an evaluator without a condition resolver.
    pub fn new(options: EvaluatorOptions) -> Self {
        Self::from_parts(options, None)
    }
}

impl<'r, R: ConditionResolver + ?Sized> Evaluator<'r, R> {
    /// Create an evaluator consulting `resolver` for names missing from the
    /// environment.
    pub fn with_resolver(
        options: EvaluatorOptions,
        resolver: &'r R,
        context: &'r R::Context,
    ) -> Self {
        Self::from_parts(options, Some((resolver, context)))
    }

    pub(crate) fn from_parts(
        options: EvaluatorOptions,
        resolver: Option<(&'r R, &'r R::Context)>,
    ) -> Self {
        Self {
            options,
            resolver,
            depth: 0,
        }
    }

    /// Execute a statement.
    ///
    /// A `var` statement unconditionally overwrites any previous binding.
    pub fn eval_statement(
        &mut self,
        statement: &Statement,
        env: &mut Environment,
    ) -> Result<StatementOutcome, EvalError> {
        match statement {
            Statement::Expression(expr) => self.eval_expr(expr, env).map(StatementOutcome::Value),
            Statement::VarDef { name, expr } => {
                let value = self.eval_expr(expr, env)?;
                tracing::trace!(name = name.as_str(), value, "assigning variable");
                env.set(name.as_str(), value);
                Ok(StatementOutcome::Assigned {
                    name: name.clone(),
                    value,
                })
            }
        }
    }

    /// Evaluate an expression node.
    pub fn eval_expr(&mut self, expr: &Expr, env: &mut Environment) -> Result<i64, EvalError> {
        // Check depth before recursing
        if self.depth >= self.options.max_depth {
            return Err(EvalError::StackOverflow {
                depth: self.depth,
                max_depth: self.options.max_depth,
            });
        }

        self.depth += 1;
        let result = self.eval_expr_inner(expr, env);
        self.depth -= 1;

        result
    }

    /// Inner evaluation logic (no depth tracking).
    fn eval_expr_inner(&mut self, expr: &Expr, env: &mut Environment) -> Result<i64, EvalError> {
        match expr {
            Expr::Number(value) => Ok(*value),

            Expr::Ident(name) => self.lookup(name, env),

            Expr::Unary { op, expr } => Ok(eval_unary(*op, self.eval_expr(expr, env)?)),

            Expr::Paren(inner) => self.eval_expr(inner, env),

            Expr::Binary { .. } | Expr::Logic { .. } | Expr::In { .. } => {
                self.eval_chain(expr, env)
            }

            Expr::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                // Only the selected branch is evaluated
                if self.eval_expr(cond, env)? != 0 {
                    self.eval_expr(then_branch, env)
                } else {
                    self.eval_expr(else_branch, env)
                }
            }
        }
    }

    /// Evaluate a left-nested operator chain such as `a + b - c`,
    /// `a && b && c` or `x in [1] in [0]`.
    ///
    /// The left spine is walked with a loop and folded bottom-up, so only right
    /// operands recurse. Parsed chains may be arbitrarily long.
    fn eval_chain(&mut self, expr: &Expr, env: &mut Environment) -> Result<i64, EvalError> {
        let mut links: SmallVec<[Link<'_>; 8]> = SmallVec::new();
        let mut leftmost = expr;
        loop {
            match leftmost {
                Expr::Binary { op, left, right } => {
                    links.push(Link::Binary(*op, right));
                    leftmost = &**left;
                }
                Expr::Logic { op, left, right } => {
                    links.push(Link::Logic(*op, right));
                    leftmost = &**left;
                }
                Expr::In { value, set } => {
                    links.push(Link::In(set));
                    leftmost = &**value;
                }
                _ => break,
            }
        }

        // Left first; an error there means no right operand is touched
        let mut acc = self.eval_expr(leftmost, env)?;
        for link in links.iter().rev() {
            acc = match *link {
                Link::Binary(op, right) => {
                    let right = self.eval_expr(right, env)?;
                    eval_binary(op, acc, right)?
                }
                Link::Logic(op, right) => match (op, acc != 0) {
                    (BoolOp::And, false) => 0,
                    (BoolOp::Or, true) => 1,
                    _ => from_bool(self.eval_expr(right, env)? != 0),
                },
                Link::In(set) => from_bool(set.contains(&acc)),
            };
        }
        Ok(acc)
    }

    fn lookup(&self, name: &str, env: &mut Environment) -> Result<i64, EvalError> {
        if let Some(value) = env.get(name) {
            return Ok(value);
        }

        let value = self
            .resolve(name)
            .ok_or_else(|| EvalError::UndefinedVariable {
                name: name.to_string(),
            })?;

        if self.options.memoize_resolved {
            tracing::debug!(name, value, "memoizing resolved condition");
            env.set(name, value);
        }
        Ok(value)
    }

    /// Ask the resolver for `name`. Faults are logged and reported as "not
    /// resolvable".
    fn resolve(&self, name: &str) -> Option<i64> {
        let (resolver, context) = self.resolver?;

        match panic::catch_unwind(AssertUnwindSafe(|| resolver.resolve(name, context))) {
            Ok(Ok(value)) => value,
            Ok(Err(err)) => {
                tracing::warn!(name, error = %err, "error while resolving condition");
                None
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::warn!(name, panic = %message, "condition resolver panicked");
                None
            }
        }
    }
}
