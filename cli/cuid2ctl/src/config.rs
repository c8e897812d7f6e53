//! Configuration from environment variables.
//!
//! Command-line flags take precedence over these values.

use anyhow::{Context, Result};

/// Identifier length variable.
pub const LENGTH_VAR: &str = "CUID2_LENGTH";

/// Instance name variable.
pub const INSTANCE_VAR: &str = "CUID2_INSTANCE";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Identifier length.
    pub length: usize,

    /// Named instance to generate from; the default instance when unset.
    pub instance: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: cuid2::DEFAULT_LENGTH,
            instance: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// A length that is set but not an integer is an error, not a silent default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let length = match lookup(LENGTH_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("{LENGTH_VAR} must be an integer, got '{raw}'"))?,
            None => cuid2::DEFAULT_LENGTH,
        };

        let instance = lookup(INSTANCE_VAR).filter(|s| !s.is_empty());

        Ok(Self { length, instance })
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, length: Option<usize>, instance: Option<String>) -> Self {
        if let Some(length) = length {
            self.length = length;
        }
        if instance.is_some() {
            self.instance = instance;
        }
        self
    }
}
