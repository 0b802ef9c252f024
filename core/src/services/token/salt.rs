//! Cryptographically secure salt generation

use rand::{rngs::OsRng, RngCore};

/// Generate a random salt as a hex string.
///
/// Uses OsRng (OS-provided CSPRNG) so salts never repeat with observable
/// probability; collision probability is determined solely by `byte_count`
/// (12 bytes gives 96 bits of entropy, 8 bytes gives 64).
///
/// # Arguments
///
/// * `byte_count` - Number of random bytes to draw; must be positive.
///   A zero count is a caller contract violation and panics.
///
/// # Returns
///
/// A hex string of length `2 * byte_count`
pub fn generate_salt(byte_count: usize) -> String {
    assert!(byte_count > 0, "salt byte count must be positive");

    let mut rng = OsRng;
    let mut bytes = vec![0u8; byte_count];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_salt_length_is_twice_byte_count() {
        assert_eq!(generate_salt(12).len(), 24);
        assert_eq!(generate_salt(8).len(), 16);
        assert_eq!(generate_salt(1).len(), 2);
    }

    #[test]
    fn test_salt_is_lowercase_hex() {
        let salt = generate_salt(32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_salts_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_salt(12)));
        }
        assert_eq!(seen.len(), 10_000);
    }

    #[test]
    #[should_panic(expected = "salt byte count must be positive")]
    fn test_zero_byte_count_panics() {
        generate_salt(0);
    }
}
