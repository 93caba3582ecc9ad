//! Deterministic content hashing for stored strings.
//!
//! The SHA-256 digest of a string's raw UTF-8 bytes is the string's identity:
//! two clients submitting the same text independently get the same id, which is
//! what duplicate detection in the storage layer keys on. The digest must stay
//! byte-compatible with any other SHA-256 implementation, so no domain
//! separators or normalization are applied.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of the input's UTF-8 bytes.
pub fn content_hash(input: &str) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(input.as_bytes());
    h.finalize().into()
}

/// Compute content hash and return as lowercase hex string.
pub fn content_hash_hex(input: &str) -> String {
    hex::encode(content_hash(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        assert_eq!(content_hash("racecar"), content_hash("racecar"));
    }

    #[test]
    fn known_vectors() {
        assert_eq!(
            content_hash_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            content_hash_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn different_content_different_hash() {
        assert_ne!(content_hash("Racecar"), content_hash("racecar"));
        assert_ne!(content_hash("race car"), content_hash("racecar"));
    }

    #[test]
    fn hashes_utf8_bytes() {
        let hash = content_hash_hex("héllo");
        assert_eq!(hash.len(), 64);
        assert_ne!(hash, content_hash_hex("hello"));
    }

    #[test]
    fn hex_roundtrip() {
        let hash = content_hash("level");
        let decoded = hex::decode(content_hash_hex("level")).unwrap();
        assert_eq!(hash.as_slice(), decoded.as_slice());
    }
}
