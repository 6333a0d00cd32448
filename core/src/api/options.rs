//! Configuration options for parsing and evaluation.

/// Configuration options for parsing.
///
/// # Example
///
/// ```
/// use calc_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum expression nesting depth (parentheses, unary chains, ternary
    /// branches). Flat operator chains such as `a + b + c` do not count.
    ///
    /// Default: 64
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: crate::parser::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for expression evaluation.
///
/// These options control resource limits and identifier resolution.
///
/// # Example
///
/// ```
/// use calc_core::api::EvaluatorOptions;
///
/// let options = EvaluatorOptions {
///     max_depth: 500,
///     memoize_resolved: false,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EvaluatorOptions {
    /// Maximum evaluation stack depth (for recursion protection).
    ///
    /// Default: 1000
    pub max_depth: usize,

    /// Write values produced by the condition resolver back into the
    /// environment.
    ///
    /// Later lookups of the same name in the same environment return the
    /// stored value without consulting the resolver again, even if the
    /// resolver would now answer differently. Nothing ever evicts these
    /// entries.
    ///
    /// Default: true
    pub memoize_resolved: bool,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            memoize_resolved: true,
        }
    }
}

/// Configuration options for the calc engine.
///
/// # Example
///
/// ```
/// use calc_core::api::{EngineOptions, EvaluatorOptions, ParseOptions};
///
/// let options = EngineOptions {
///     parse: ParseOptions::default(),
///     evaluation: EvaluatorOptions {
///         max_depth: 200,
///         ..EvaluatorOptions::default()
///     },
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub parse: ParseOptions,
    pub evaluation: EvaluatorOptions,
}
