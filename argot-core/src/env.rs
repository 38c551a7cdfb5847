//! Access to environment variables used as fallbacks for absent options.

use std::collections::HashMap;

/// Trait implemented by sources of environment variables.
pub trait Environment: Send + Sync {
    /// Returns the value of the named variable, if it is set.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the variable.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads variables from the environment of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// An environment in which no variable is set.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn var(&self, _name: &str) -> Option<String> {
        None
    }
}
