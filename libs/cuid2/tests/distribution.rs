//! Statistical distribution checks for prefixes and bodies.
//!
//! Each bucket must land within 3% of its expected count. With a million
//! samples that band is several standard deviations wide.

use cuid2::{GeneratorInstance, InstanceHandle, DEFAULT_LENGTH};

const SAMPLES: usize = 1_000_000;
const TOLERANCE: f64 = 0.03;
const BODY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn assert_uniform(counts: &[u64], total: u64, label: &str) {
    let expected = total as f64 / counts.len() as f64;
    for (bucket, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        assert!(
            deviation <= TOLERANCE,
            "{label} bucket {bucket}: {count} vs expected {expected:.0} ({:.2}% off)",
            deviation * 100.0
        );
    }
}

#[test]
fn test_prefix_and_body_distribution() {
    let instance = GeneratorInstance::start(InstanceHandle::named("distribution")).unwrap();

    let mut prefix_counts = [0u64; 26];
    let mut body_counts = [0u64; 36];
    let mut body_total = 0u64;

    for _ in 0..SAMPLES {
        let id = instance.generate(DEFAULT_LENGTH).unwrap();
        let bytes = id.as_bytes();

        prefix_counts[usize::from(bytes[0] - b'a')] += 1;

        for b in &bytes[1..] {
            let index = BODY_ALPHABET
                .iter()
                .position(|c| c == b)
                .expect("body character outside base-36 alphabet");
            body_counts[index] += 1;
            body_total += 1;
        }
    }

    assert_uniform(&prefix_counts, SAMPLES as u64, "prefix");
    assert_uniform(&body_counts, body_total, "body");
}
