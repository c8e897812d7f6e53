//! Instance fingerprints.
//!
//! A fingerprint separates identifiers produced by different processes,
//! hosts, and instances even when their timestamps and counters collide.
//! It is computed once when an instance starts and never changes after.

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::Result;
use crate::random::fill_secure;

/// Fingerprint size in bytes (SHA-256 output).
pub const FINGERPRINT_LEN: usize = 32;

/// Random salt mixed into every fingerprint.
const SALT_LEN: usize = 32;

/// Host name used when the real one cannot be read.
const FALLBACK_HOSTNAME: &str = "localhost";

/// Fixed-size digest identifying one generator instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Derives a fingerprint for the named instance in this process.
    pub fn derive(instance_name: &str) -> Result<Self> {
        let mut salt = [0u8; SALT_LEN];
        fill_secure(&mut salt)?;

        let started_at_ns = Utc::now().timestamp_nanos_opt().unwrap_or_default();

        Ok(Self::from_parts(
            std::process::id(),
            &hostname(),
            instance_name,
            started_at_ns,
            &salt,
        ))
    }

    /// Hashes the identity components in a fixed, length-prefixed layout.
    pub(crate) fn from_parts(
        pid: u32,
        host: &str,
        instance_name: &str,
        started_at_ns: i64,
        salt: &[u8],
    ) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(pid.to_be_bytes());
        update_prefixed(&mut hasher, host.as_bytes());
        update_prefixed(&mut hasher, instance_name.as_bytes());
        hasher.update(started_at_ns.to_be_bytes());
        hasher.update(salt);
        Self(hasher.finalize().into())
    }

    /// Returns the raw fingerprint bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

// Raw bytes stay out of logs
impl std::fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Fingerprint(..)")
    }
}

fn update_prefixed(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_be_bytes());
    hasher.update(bytes);
}

fn hostname() -> String {
    match nix::unistd::gethostname() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            warn!(error = %e, fallback = FALLBACK_HOSTNAME, "failed to read host name");
            FALLBACK_HOSTNAME.to_string()
        }
    }
}
