//! # cuid2
//!
//! Collision-resistant, horizontally scalable string identifiers.
//!
//! ## ID Format
//!
//! A CUID2 is one random lowercase letter followed by 23 to 31 base-36
//! characters (`[a-z][a-z0-9]{23,31}`), 24 characters by default:
//!
//! - `tz4a98xxat96iws9zmbrgj3a`
//! - `pfh0haxfpzowht3oi213cqos`
//!
//! The body is the tail of a SHA-256 digest over:
//! - a millisecond timestamp
//! - a per-instance counter (distinct values within one instance)
//! - secure random entropy as wide as the identifier
//! - an instance fingerprint (process, host, and instance identity)
//!
//! Uniqueness is probabilistic. No coordination happens between instances,
//! processes, or hosts.
//!
//! ## Instances
//!
//! Counters and fingerprints live in [`GeneratorInstance`]s. The free
//! functions below use the implicit default instance in the global
//! [`Registry`]; start named instances to keep independent counters per
//! tenant or worker.
//!
//! ```
//! let id = cuid2::generate().unwrap();
//! assert!(cuid2::is_valid(&id));
//!
//! let tenant = cuid2::start_instance(Some("billing")).unwrap();
//! let id = cuid2::generate_in(32, &tenant).unwrap();
//! assert_eq!(id.len(), 32);
//! cuid2::stop_instance(&tenant).unwrap();
//! ```

mod counter;
mod encoding;
mod error;
mod fingerprint;
mod generator;
mod instance;
mod random;
mod registry;
mod types;
mod validate;

pub use counter::{CounterService, COUNTER_MAX};
pub use error::{Cuid2Error, Result};
pub use fingerprint::{Fingerprint, FINGERPRINT_LEN};
pub use generator::{check_length, DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};
pub use instance::{GeneratorInstance, InstanceHandle, DEFAULT_INSTANCE};
pub use registry::Registry;
pub use types::Cuid2;
pub use validate::{is_valid, is_valid_value};

/// Generates a 24-character identifier from the default instance.
pub fn generate() -> Result<String> {
    generate_with_length(DEFAULT_LENGTH)
}

/// Generates an identifier of `length` characters from the default instance.
///
/// Fails with [`Cuid2Error::InvalidLength`] outside `24..=32`.
pub fn generate_with_length(length: usize) -> Result<String> {
    generate_in(length, &InstanceHandle::default_instance())
}

/// Generates an identifier from the instance behind `handle` in the global registry.
pub fn generate_in(length: usize, handle: &InstanceHandle) -> Result<String> {
    Registry::global().generate(length, handle)
}

/// Starts an instance in the global registry.
pub fn start_instance(name: Option<&str>) -> Result<InstanceHandle> {
    Registry::global().start(name)
}

/// Stops an instance in the global registry.
pub fn stop_instance(handle: &InstanceHandle) -> Result<()> {
    Registry::global().stop(handle)
}

/// Restarts an instance in the global registry with a fresh counter and fingerprint.
pub fn restart_instance(handle: &InstanceHandle) -> Result<()> {
    Registry::global().restart(handle)
}
