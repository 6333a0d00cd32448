//! Pluggable resolution of identifiers missing from the environment.

use thiserror::Error;

/// Fault reported by a [`ConditionResolver`].
///
/// The evaluator logs the fault and treats the identifier as unresolved; it is
/// never returned to the caller of an evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResolveError {
    message: String,
}

impl ResolveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// External source of values for identifiers not bound in the environment,
/// e.g. game-rule conditions such as `charge` or `age`.
///
/// The evaluator is constructed with a resolver and an opaque context value;
/// both are passed back on every lookup. Returning `Ok(None)` means the name is
/// not known. Errors and panics inside `resolve` are caught, logged, and
/// treated exactly like `Ok(None)`.
///
/// A resolver shared between threads must provide its own synchronization; the
/// evaluator adds none.
///
/// # Example
///
/// ```
/// use calc_core::api::{ConditionResolver, ResolveError};
///
/// struct Player {
///     charge: i64,
/// }
///
/// struct PlayerConditions;
///
/// impl ConditionResolver for PlayerConditions {
///     type Context = Player;
///
///     fn resolve(&self, name: &str, player: &Player) -> Result<Option<i64>, ResolveError> {
///         Ok(match name {
///             "charge" => Some(player.charge),
///             _ => None,
///         })
///     }
/// }
/// ```
pub trait ConditionResolver {
    /// Opaque value supplied at evaluator construction.
    type Context: ?Sized;

    fn resolve(&self, name: &str, context: &Self::Context) -> Result<Option<i64>, ResolveError>;
}

/// Resolver that knows no names. Used when no resolver is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl ConditionResolver for NoResolver {
    type Context = ();

    fn resolve(&self, _name: &str, _context: &()) -> Result<Option<i64>, ResolveError> {
        Ok(None)
    }
}
