//! Secure random draws.
//!
//! All entropy comes from the operating system via [`OsRng`]. A failing
//! random source is surfaced as [`Cuid2Error::Entropy`] and never replaced
//! with a weaker fallback.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::{Cuid2Error, Result};

/// Number of letters in the prefix alphabet.
const LETTER_COUNT: u8 = 26;

/// Largest multiple of 26 that fits in a byte (9 * 26). Bytes at or above
/// this bound are rejected so `byte % 26` stays unbiased.
const LETTER_REJECT_BOUND: u8 = 234;

/// Bytes drawn per refill while sampling a letter.
const LETTER_BATCH: usize = 8;

/// Fills `dest` with bytes from the operating system's secure random source.
pub fn fill_secure(dest: &mut [u8]) -> Result<()> {
    fill_from(&mut OsRng, dest)
}

/// Draws a uniformly distributed lowercase letter from the secure source.
pub fn random_letter() -> Result<char> {
    sample_letter(&mut OsRng)
}

pub(crate) fn fill_from<R: TryRngCore>(rng: &mut R, dest: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(dest)
        .map_err(|e| Cuid2Error::Entropy(e.to_string()))
}

/// Rejection-samples a letter in `a..=z` from `rng`.
pub(crate) fn sample_letter<R: TryRngCore>(rng: &mut R) -> Result<char> {
    let mut batch = [0u8; LETTER_BATCH];
    loop {
        fill_from(rng, &mut batch)?;
        if let Some(byte) = batch.iter().copied().find(|b| *b < LETTER_REJECT_BOUND) {
            return Ok(char::from(b'a' + byte % LETTER_COUNT));
        }
    }
}
