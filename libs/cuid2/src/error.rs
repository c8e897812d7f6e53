//! Error types for identifier generation and instance management.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Cuid2Error>;

/// Errors that can occur when generating identifiers or managing instances.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Cuid2Error {
    /// The requested identifier length is outside the supported range.
    #[error("invalid length {length}: must be between {min} and {max}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    /// No running instance is registered under this handle.
    #[error("unknown generator instance '{0}'")]
    UnknownInstance(String),

    /// The instance has been stopped and can no longer generate.
    #[error("generator instance '{0}' is stopped")]
    InstanceStopped(String),

    /// An instance with this name is already running.
    #[error("generator instance '{0}' already exists")]
    InstanceExists(String),

    /// The name is reserved for the implicit default instance.
    #[error("instance name '{0}' is reserved")]
    ReservedInstanceName(String),

    /// The operating system's secure random source failed.
    #[error("secure random source unavailable: {0}")]
    Entropy(String),

    /// A string did not match the CUID2 format.
    #[error("invalid CUID2: '{0}'")]
    InvalidFormat(String),
}

impl Cuid2Error {
    /// Returns true if the caller supplied an invalid argument or handle.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Cuid2Error::InvalidLength { .. }
                | Cuid2Error::UnknownInstance(_)
                | Cuid2Error::InstanceStopped(_)
                | Cuid2Error::InstanceExists(_)
                | Cuid2Error::ReservedInstanceName(_)
        )
    }

    /// Returns true if the error comes from the environment rather than the caller.
    pub fn is_environment_failure(&self) -> bool {
        matches!(self, Cuid2Error::Entropy(_))
    }
}
