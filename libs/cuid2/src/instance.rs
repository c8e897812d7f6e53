//! Generator instances and their handles.
//!
//! A [`GeneratorInstance`] owns one counter and one fingerprint. The
//! fingerprint is derived eagerly when the instance starts and is immutable
//! for the instance's lifetime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ulid::Ulid;

use crate::counter::CounterService;
use crate::error::{Cuid2Error, Result};
use crate::fingerprint::Fingerprint;
use crate::generator;

/// Name of the implicit process-wide instance.
pub const DEFAULT_INSTANCE: &str = "default";

/// Prefix used for handles of anonymous instances.
const ANONYMOUS_PREFIX: &str = "inst";

/// Opaque name of a generator instance, unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceHandle(Arc<str>);

impl InstanceHandle {
    /// Creates a handle for a named instance.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Creates a fresh handle for an anonymous instance (`inst_<ulid>`).
    #[must_use]
    pub fn anonymous() -> Self {
        Self(Arc::from(format!("{}_{}", ANONYMOUS_PREFIX, Ulid::new())))
    }

    /// The handle of the implicit default instance.
    #[must_use]
    pub fn default_instance() -> Self {
        Self::named(DEFAULT_INSTANCE)
    }

    /// Returns the handle as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the implicit default instance.
    #[must_use]
    pub fn is_default(&self) -> bool {
        &*self.0 == DEFAULT_INSTANCE
    }
}

impl std::fmt::Display for InstanceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InstanceHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A unit of counter state plus its fingerprint.
#[derive(Debug)]
pub struct GeneratorInstance {
    handle: InstanceHandle,
    counter: CounterService,
    fingerprint: Fingerprint,
    running: AtomicBool,
}

impl GeneratorInstance {
    /// Starts an instance: counter at zero, fingerprint derived now.
    pub fn start(handle: InstanceHandle) -> Result<Self> {
        let fingerprint = Fingerprint::derive(handle.as_str())?;
        Ok(Self::with_parts(handle, CounterService::new(), fingerprint))
    }

    pub(crate) fn with_parts(
        handle: InstanceHandle,
        counter: CounterService,
        fingerprint: Fingerprint,
    ) -> Self {
        Self {
            handle,
            counter,
            fingerprint,
            running: AtomicBool::new(true),
        }
    }

    /// Returns the handle this instance was started under.
    pub fn handle(&self) -> &InstanceHandle {
        &self.handle
    }

    /// Returns the instance fingerprint.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Returns the instance counter.
    pub fn counter(&self) -> &CounterService {
        &self.counter
    }

    /// Returns true until [`stop`](Self::stop) is called.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Marks the instance stopped; later calls to `generate` fail.
    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Returns the next counter value, failing if the instance is stopped.
    pub fn next_count(&self) -> Result<u64> {
        if !self.is_running() {
            return Err(Cuid2Error::InstanceStopped(self.handle.to_string()));
        }
        Ok(self.counter.next())
    }

    /// Generates an identifier of `length` characters from this instance.
    pub fn generate(&self, length: usize) -> Result<String> {
        generator::generate(self, length)
    }
}
