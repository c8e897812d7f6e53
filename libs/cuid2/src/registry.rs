//! Instance registry.
//!
//! Maps handles to running [`GeneratorInstance`]s and owns their lifecycle.
//! A [`Registry`] is an ordinary value that can be created per test or per
//! tenant; [`Registry::global`] is the process-wide one behind the crate's
//! free functions.
//!
//! # Lifecycle
//!
//! - `start` registers a fresh instance (counter 0, new fingerprint)
//! - `stop` unregisters it and marks it stopped for anyone still holding it
//! - `restart` swaps in a fresh instance under the same handle; the new
//!   fingerprint keeps post-restart identifiers apart from earlier ones even
//!   though the counter starts over
//!
//! The default instance is started on first use and cannot be stopped.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{Cuid2Error, Result};
use crate::instance::{GeneratorInstance, InstanceHandle};

type InstanceMap = HashMap<InstanceHandle, Arc<GeneratorInstance>>;

/// Registry of running generator instances.
#[derive(Debug, Default)]
pub struct Registry {
    instances: RwLock<InstanceMap>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Starts a named instance, or an anonymous one when `name` is `None`.
    pub fn start(&self, name: Option<&str>) -> Result<InstanceHandle> {
        let handle = match name {
            Some(name) => InstanceHandle::named(name),
            None => InstanceHandle::anonymous(),
        };

        if handle.is_default() {
            return Err(Cuid2Error::ReservedInstanceName(handle.to_string()));
        }

        let mut instances = self.write();
        if instances.contains_key(&handle) {
            return Err(Cuid2Error::InstanceExists(handle.to_string()));
        }

        let instance = GeneratorInstance::start(handle.clone())?;
        instances.insert(handle.clone(), Arc::new(instance));
        debug!(instance = %handle, "generator instance started");

        Ok(handle)
    }

    /// Stops the instance and removes it from the registry.
    pub fn stop(&self, handle: &InstanceHandle) -> Result<()> {
        if handle.is_default() {
            return Err(Cuid2Error::ReservedInstanceName(handle.to_string()));
        }

        let removed = self
            .write()
            .remove(handle)
            .ok_or_else(|| Cuid2Error::UnknownInstance(handle.to_string()))?;
        removed.stop();
        debug!(instance = %handle, "generator instance stopped");

        Ok(())
    }

    /// Replaces the instance with a fresh one under the same handle.
    ///
    /// The counter returns to zero and the fingerprint is derived again.
    /// Holders of the previous instance see it as stopped.
    pub fn restart(&self, handle: &InstanceHandle) -> Result<()> {
        let mut instances = self.write();
        if !handle.is_default() && !instances.contains_key(handle) {
            return Err(Cuid2Error::UnknownInstance(handle.to_string()));
        }

        let fresh = Arc::new(GeneratorInstance::start(handle.clone())?);
        if let Some(previous) = instances.insert(handle.clone(), fresh) {
            previous.stop();
        }
        debug!(instance = %handle, "generator instance restarted");

        Ok(())
    }

    /// Looks up a running instance.
    ///
    /// The default handle always resolves, starting the instance if needed.
    pub fn get(&self, handle: &InstanceHandle) -> Result<Arc<GeneratorInstance>> {
        if let Some(instance) = self.read().get(handle) {
            return Ok(Arc::clone(instance));
        }

        if handle.is_default() {
            return self.start_default();
        }

        Err(Cuid2Error::UnknownInstance(handle.to_string()))
    }

    /// Generates an identifier from the instance behind `handle`.
    pub fn generate(&self, length: usize, handle: &InstanceHandle) -> Result<String> {
        self.get(handle)?.generate(length)
    }

    /// Returns the handles of all running instances, sorted.
    pub fn handles(&self) -> Vec<InstanceHandle> {
        let mut handles: Vec<_> = self.read().keys().cloned().collect();
        handles.sort();
        handles
    }

    /// Returns the number of running instances.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no instance is running.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn start_default(&self) -> Result<Arc<GeneratorInstance>> {
        let handle = InstanceHandle::default_instance();
        let mut instances = self.write();

        // Another caller may have started it while we waited for the lock
        if let Some(instance) = instances.get(&handle) {
            return Ok(Arc::clone(instance));
        }

        let instance = Arc::new(GeneratorInstance::start(handle.clone())?);
        instances.insert(handle.clone(), Arc::clone(&instance));
        debug!(instance = %handle, "default generator instance started");

        Ok(instance)
    }

    fn read(&self) -> RwLockReadGuard<'_, InstanceMap> {
        self.instances.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, InstanceMap> {
        self.instances.write().unwrap_or_else(PoisonError::into_inner)
    }
}
