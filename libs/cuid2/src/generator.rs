//! Identifier generation.
//!
//! Each identifier hashes a millisecond timestamp, the instance counter,
//! `length` bytes of secure entropy, and the instance fingerprint with
//! SHA-256. The digest is encoded in base 36 and its last `length - 1`
//! characters follow a random letter prefix.

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::encoding::{tail, to_base36};
use crate::error::{Cuid2Error, Result};
use crate::fingerprint::FINGERPRINT_LEN;
use crate::instance::GeneratorInstance;
use crate::random::{fill_secure, random_letter};

/// Length used when the caller does not ask for one.
pub const DEFAULT_LENGTH: usize = 24;

/// Shortest identifier that can be generated.
pub const MIN_LENGTH: usize = 24;

/// Longest identifier that can be generated.
pub const MAX_LENGTH: usize = 32;

/// Rejects lengths outside `MIN_LENGTH..=MAX_LENGTH`.
pub fn check_length(length: usize) -> Result<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(Cuid2Error::InvalidLength {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
    }
}

/// Generates an identifier of exactly `length` characters from `instance`.
pub fn generate(instance: &GeneratorInstance, length: usize) -> Result<String> {
    check_length(length)?;

    let timestamp_ms = Utc::now().timestamp_millis();
    let count = instance.next_count()?;

    let mut entropy = [0u8; MAX_LENGTH];
    let entropy = &mut entropy[..length];
    fill_secure(entropy)?;

    let digest = hash_inputs(
        length,
        timestamp_ms,
        count,
        entropy,
        instance.fingerprint().as_bytes(),
    );
    let body = tail(&to_base36(&digest), length - 1);

    let mut id = String::with_capacity(length);
    id.push(random_letter()?);
    id.push_str(&body);
    Ok(id)
}

/// Hashes the generation inputs in a fixed-width layout:
/// `length || timestamp || counter || entropy || fingerprint`.
pub(crate) fn hash_inputs(
    length: usize,
    timestamp_ms: i64,
    count: u64,
    entropy: &[u8],
    fingerprint: &[u8; FINGERPRINT_LEN],
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    // length <= MAX_LENGTH, fits in one byte
    hasher.update([length as u8]);
    hasher.update(timestamp_ms.to_be_bytes());
    hasher.update(count.to_be_bytes());
    hasher.update(entropy);
    hasher.update(fingerprint);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::instance::InstanceHandle;
    use crate::validate::is_valid;

    fn instance() -> GeneratorInstance {
        GeneratorInstance::start(InstanceHandle::named("generator-test")).unwrap()
    }

    #[rstest]
    #[case(24)]
    #[case(25)]
    #[case(28)]
    #[case(31)]
    #[case(32)]
    fn test_generate_valid_lengths(#[case] length: usize) {
        let instance = instance();
        let id = generate(&instance, length).unwrap();
        assert_eq!(id.len(), length);
        assert!(is_valid(&id), "{id} should be valid");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(23)]
    #[case(33)]
    #[case(usize::MAX)]
    fn test_generate_rejects_invalid_lengths(#[case] length: usize) {
        let instance = instance();
        let err = generate(&instance, length).unwrap_err();
        assert!(matches!(err, Cuid2Error::InvalidLength { length: l, .. } if l == length));
    }

    #[test]
    fn test_invalid_length_does_not_consume_counter() {
        let instance = instance();
        let _ = generate(&instance, 23);
        assert_eq!(instance.counter().peek(), 0);
    }

    #[test]
    fn test_generate_advances_counter() {
        let instance = instance();
        for _ in 0..5 {
            generate(&instance, DEFAULT_LENGTH).unwrap();
        }
        assert_eq!(instance.counter().peek(), 5);
    }

    #[test]
    fn test_hash_inputs_separates_fields() {
        let fp = [9u8; FINGERPRINT_LEN];
        let base = hash_inputs(24, 1_700_000_000_000, 7, &[1; 24], &fp);

        assert_eq!(base, hash_inputs(24, 1_700_000_000_000, 7, &[1; 24], &fp));
        assert_ne!(base, hash_inputs(24, 1_700_000_000_001, 7, &[1; 24], &fp));
        assert_ne!(base, hash_inputs(24, 1_700_000_000_000, 8, &[1; 24], &fp));
        assert_ne!(base, hash_inputs(24, 1_700_000_000_000, 7, &[2; 24], &fp));
        assert_ne!(
            base,
            hash_inputs(24, 1_700_000_000_000, 7, &[1; 24], &[0; FINGERPRINT_LEN])
        );
    }

    #[test]
    fn test_check_length_bounds() {
        assert!(check_length(MIN_LENGTH).is_ok());
        assert!(check_length(MAX_LENGTH).is_ok());
        assert!(check_length(MIN_LENGTH - 1).is_err());
        assert!(check_length(MAX_LENGTH + 1).is_err());
    }
}
