//! Mutable variable bindings threaded through evaluation.

use hashbrown::HashMap;
use static_assertions::assert_impl_all;

/// Mapping from variable name to integer value.
///
/// The environment is created by the caller and passed by mutable reference to
/// every evaluation call. It is mutated by `var` statements and, when enabled,
/// by memoized resolver lookups. Nothing resets it: reuse one environment
/// across calls to keep bindings for a whole session.
///
/// # Example
///
/// ```
/// use calc_core::api::Environment;
///
/// let mut env = Environment::from_iter([("charge", 500), ("age", 20)]);
/// env.set("level", 3);
/// assert_eq!(env.get("age"), Some(20));
/// assert_eq!(env.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: HashMap<String, i64>,
}

assert_impl_all!(Environment: Send, Sync);

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.vars.get(name).copied()
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.vars.insert(name.into(), value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.vars.remove(name)
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.vars.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut env = Environment::new();
        env.extend(iter);
        env
    }
}

impl<K: Into<String>> Extend<(K, i64)> for Environment {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}
