//! Golden test vectors for deterministic verification.
//!
//! These pin the binary layout, hash-derived nonces, and proof digests so
//! that independent implementations interoperate.

use noncework_core::Nonce;
use noncework_effort::{leading_zero_bits, Effort};

/// A binary/text layout vector.
#[derive(Debug, Clone)]
pub struct BinaryVector {
    pub name: &'static str,
    /// Content bytes (hex).
    pub content: &'static str,
    /// Expected binary form (hex).
    pub binary: &'static str,
    /// Expected canonical text form.
    pub text: &'static str,
}

/// A hash-derived nonce vector.
#[derive(Debug, Clone)]
pub struct HashVector {
    pub input: &'static str,
    pub length: usize,
    /// Expected content (hex).
    pub expected: &'static str,
}

/// A known-good proof over a fixed prefix.
#[derive(Debug, Clone)]
pub struct EffortVector {
    pub name: &'static str,
    pub bits: u32,
    /// Input prefix (hex).
    pub prefix: &'static str,
    /// Proof content (hex).
    pub proof: &'static str,
    /// Leading zero bits of SHA-1(prefix || proof).
    pub achieved: u32,
    /// Expected digest (hex).
    pub digest: &'static str,
}

/// `000102...11 || deadbeef`: an 18-byte base with a 4-byte salt.
const PREFIX: &str = "000102030405060708090a0b0c0d0e0f1011deadbeef";

/// Get all binary layout vectors.
pub fn binary_vectors() -> Vec<BinaryVector> {
    vec![
        BinaryVector {
            name: "zero sentinel",
            content: "",
            binary: "80",
            text: "",
        },
        BinaryVector {
            name: "single byte",
            content: "01",
            binary: "8101",
            text: "AQ",
        },
        BinaryVector {
            name: "default length",
            content: "000102030405060708090a0b0c0d0e0f1011",
            binary: "92000102030405060708090a0b0c0d0e0f1011",
            text: "AAECAwQFBgcICQoLDA0ODxAR",
        },
        BinaryVector {
            name: "url-safe characters",
            content: "fbfffe00",
            binary: "84fbfffe00",
            text: "-__-AA",
        },
    ]
}

/// Get all hash-derived nonce vectors.
pub fn hash_vectors() -> Vec<HashVector> {
    vec![
        HashVector {
            input: "lobby",
            length: 18,
            expected: "6dc57172bc0a4be0aca7c20783625d72fce9",
        },
        HashVector {
            input: "",
            length: 4,
            expected: "da39a3ee",
        },
        HashVector {
            // Longer than the digest: bytes cycle.
            input: "game:42",
            length: 25,
            expected: "0b9cd0329dcf30179efef5fd40dc91bee9eabd920b9cd0329d",
        },
    ]
}

/// Get all proof vectors.
pub fn effort_vectors() -> Vec<EffortVector> {
    vec![
        EffortVector {
            name: "8 bits",
            bits: 8,
            prefix: PREFIX,
            proof: "339348cc0b1583e7030122aa19c73d29f681",
            achieved: 9,
            digest: "0072e68dac35af83376d0c42cd7013924f601af6",
        },
        EffortVector {
            name: "12 bits",
            bits: 12,
            prefix: PREFIX,
            proof: "f4bca60aeabc36a2bd894d68dbb4a0fd24ab",
            achieved: 12,
            digest: "000c8159d257a14e504dde608763159093bad9e1",
        },
        EffortVector {
            name: "16 bits",
            bits: 16,
            prefix: PREFIX,
            proof: "57c4f4580776a7e8f72e4250cf3c08a8c1a3",
            achieved: 16,
            digest: "0000c39e017539998d9941632265d67e49d55114",
        },
    ]
}

fn decode_hex(s: &str) -> Vec<u8> {
    hex::decode(s).expect("vector hex is valid")
}

/// Check one binary vector against the implementation.
pub fn check_binary_vector(v: &BinaryVector) -> bool {
    let content = decode_hex(v.content);
    let binary = decode_hex(v.binary);
    let Ok(decoded) = Nonce::from_binary(&binary, 0) else {
        return false;
    };
    decoded.as_bytes() == &content[..]
        && decoded.to_binary() == binary
        && decoded.to_text() == v.text
        && Nonce::from_text(v.text).is_ok_and(|n| n == decoded)
}

/// Check one hash vector against the implementation.
pub fn check_hash_vector(v: &HashVector) -> bool {
    Nonce::new_from_string_hash(v.input, v.length)
        .is_ok_and(|n| hex::encode(n.as_bytes()) == v.expected)
}

/// Check one proof vector against the implementation.
pub fn check_effort_vector(v: &EffortVector) -> bool {
    let Ok(effort) = Effort::from_raw(v.bits, decode_hex(v.prefix)) else {
        return false;
    };
    let Ok(proof) = Nonce::from_bytes(&decode_hex(v.proof)) else {
        return false;
    };
    let digest = effort.digest_with(proof.as_bytes());
    digest.to_hex() == v.digest
        && leading_zero_bits(digest.as_bytes()) == v.achieved
        && effort.verify(&proof) == Ok(v.achieved)
}

/// Verify every vector, returning `(name, passed)` pairs.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let binary = binary_vectors()
        .into_iter()
        .map(|v| (format!("binary: {}", v.name), check_binary_vector(&v)));
    let hash = hash_vectors()
        .into_iter()
        .map(|v| (format!("hash: {:?}/{}", v.input, v.length), check_hash_vector(&v)));
    let effort = effort_vectors()
        .into_iter()
        .map(|v| (format!("effort: {}", v.name), check_effort_vector(&v)));
    binary.chain(hash).chain(effort).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_vectors_pass() {
        for (name, passed) in verify_all_vectors() {
            assert!(passed, "vector '{}' failed", name);
        }
    }

    #[test]
    fn test_prefix_is_base_plus_salt() {
        let prefix = decode_hex(PREFIX);
        assert_eq!(prefix.len(), 22);
    }

    #[test]
    fn test_tampered_proof_fails() {
        let v = &effort_vectors()[2];
        let mut proof = decode_hex(v.proof);
        proof[0] ^= 0x01;
        let effort = Effort::from_raw(v.bits, decode_hex(v.prefix)).unwrap();
        let tampered = Nonce::from_bytes(&proof).unwrap();
        assert_ne!(effort.digest_with(tampered.as_bytes()).to_hex(), v.digest);
    }
}
