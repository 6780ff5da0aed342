//! Variable storage for one run.
//!
//! A single flat namespace: there are no scopes, blocks do not introduce
//! bindings, and assignment always overwrites. Reading a name that was
//! never assigned yields 0 and does not create a binding.

use rustc_hash::FxHashMap;

/// Mapping from variable name to its current value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    bindings: FxHashMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Current value of `name`, 0 if it was never assigned.
    #[inline]
    pub fn get(&self, name: &str) -> i64 {
        self.lookup(name).unwrap_or(0)
    }

    /// Current value of `name`, `None` if it was never assigned.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn assign(&mut self, name: &str, value: i64) -> Option<i64> {
        if let Some(slot) = self.bindings.get_mut(name) {
            Some(std::mem::replace(slot, value))
        } else {
            self.bindings.insert(name.to_owned(), value);
            None
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter().map(|(name, &value)| (name.as_str(), value))
    }

    /// Bindings sorted by name.
    pub fn sorted_bindings(&self) -> Vec<(&str, i64)> {
        let mut bindings: Vec<_> = self.iter().collect();
        bindings.sort_unstable_by_key(|&(name, _)| name);
        bindings
    }
}

impl<'a> FromIterator<(&'a str, i64)> for Environment {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (name, value) in iter {
            env.assign(name, value);
        }
        env
    }
}
