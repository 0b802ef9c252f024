//! Keyed signature hashing

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `input` and return it base64-encoded.
///
/// Pure function: deterministic, no side effects, no secret state held
/// here. The caller concatenates all sensitive material (timestamp, salt,
/// secret) into `input` before hashing.
pub fn digest_base64(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    BASE64.encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = digest_base64("1700000000000abc123secret");
        let b = digest_base64("1700000000000abc123secret");
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_inputs_produce_distinct_digests() {
        let inputs = ["", "a", "b", "ab", "ba", "1700000000000", "1700000000001"];
        for x in &inputs {
            for y in &inputs {
                if x != y {
                    assert_ne!(digest_base64(x), digest_base64(y));
                }
            }
        }
    }

    #[test]
    fn test_digest_is_base64_of_32_bytes() {
        // SHA-256 output is 32 bytes, which base64 encodes to 44 chars
        assert_eq!(digest_base64("anything").len(), 44);
    }

    #[test]
    fn test_known_vector() {
        // SHA-256("") = e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855
        assert_eq!(digest_base64(""), "47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=");
    }
}
