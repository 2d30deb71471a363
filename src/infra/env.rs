//! Environment lookup
//!
//! Default resolution reads the platform's application-data directory from
//! the environment. The lookup goes through [`EnvSource`] so callers can
//! supply deterministic values instead of the real process environment.

use std::collections::HashMap;
use std::env;

/// Key/value lookup capability for environment variables
pub trait EnvSource {
    /// Value of `key`, or `None` when unset
    fn get(&self, key: &str) -> Option<String>;

    /// Value of `key`, treating an empty value as unset
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// The real process environment
///
/// Variable names are matched case-insensitively, the way Windows resolves
/// them, so `ProgramData` and `PROGRAMDATA` find the same value on any host.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if let Ok(value) = env::var(key) {
            return Some(value);
        }

        env::vars()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }
}

/// In-memory environment
///
/// Keys are matched case-insensitively like [`ProcessEnv`].
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_ascii_lowercase(), value.to_string());
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(&key.to_ascii_lowercase()).cloned()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Self::new();
        for (key, value) in iter {
            env.set(key.as_ref(), value.as_ref());
        }
        env
    }
}
