//! Base-36 encoding of digests.

/// Base-36 alphabet, digits first.
pub const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Character used to left-pad a body when the encoding is too short.
pub const PAD_CHAR: char = '0';

/// Encodes a big-endian unsigned integer in base 36.
///
/// The result has no leading zeros; an all-zero input encodes as `"0"`.
pub fn to_base36(bytes: &[u8]) -> String {
    let mut number = bytes.to_vec();
    // Index of the first non-zero byte; the division loop only touches number[start..]
    let mut start = leading_zeros(&number, 0);
    if start == number.len() {
        return PAD_CHAR.to_string();
    }

    let mut digits = Vec::with_capacity(bytes.len() * 8 / 5 + 1);
    while start < number.len() {
        let mut remainder: u32 = 0;
        for byte in &mut number[start..] {
            let acc = (remainder << 8) | u32::from(*byte);
            // acc < 36 * 256, so the quotient fits in a byte
            *byte = (acc / 36) as u8;
            remainder = acc % 36;
        }
        digits.push(ALPHABET[remainder as usize]);
        start = leading_zeros(&number, start);
    }

    digits.reverse();
    // Every byte comes from ALPHABET
    digits.into_iter().map(char::from).collect()
}

fn leading_zeros(number: &[u8], from: usize) -> usize {
    from + number[from..].iter().take_while(|b| **b == 0).count()
}

/// Returns the last `len` characters of `encoded`, left-padded with
/// [`PAD_CHAR`] when `encoded` is shorter than `len`.
pub fn tail(encoded: &str, len: usize) -> String {
    let available = encoded.len();
    if available >= len {
        return encoded[available - len..].to_string();
    }

    let mut out = String::with_capacity(len);
    out.extend(std::iter::repeat(PAD_CHAR).take(len - available));
    out.push_str(encoded);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36_small_values() {
        assert_eq!(to_base36(&[0]), "0");
        assert_eq!(to_base36(&[]), "0");
        assert_eq!(to_base36(&[35]), "z");
        assert_eq!(to_base36(&[36]), "10");
        assert_eq!(to_base36(&[0, 0, 1, 0]), "74"); // 256 = 7*36 + 4
    }

    #[test]
    fn test_to_base36_matches_u128_formatting() {
        let values: [u128; 4] = [1, 1_295, 1_679_616, u128::MAX];
        for value in values {
            let mut expected = Vec::new();
            let mut n = value;
            while n > 0 {
                expected.push(ALPHABET[(n % 36) as usize] as char);
                n /= 36;
            }
            let expected: String = expected.into_iter().rev().collect();
            assert_eq!(to_base36(&value.to_be_bytes()), expected);
        }
    }

    #[test]
    fn test_to_base36_full_digest_width() {
        // 2^256 - 1 needs 50 base-36 digits
        let encoded = to_base36(&[0xff; 32]);
        assert_eq!(encoded.len(), 50);
        assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_tail_truncates_from_left() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("abc", 3), "abc");
    }

    #[test]
    fn test_tail_pads_short_input() {
        assert_eq!(tail("z", 4), "000z");
        assert_eq!(tail("", 2), "00");
    }
}
