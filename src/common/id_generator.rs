// src/common/id_generator.rs
//! Session identifier generator
//!
//! Sessions are keyed by random Crockford Base32 strings. The alphabet
//! excludes I, L, O and U, so identifiers survive being read aloud or
//! copied by hand from logs. Catalog rows (giveaways, products, events,
//! cart items) use database AUTOINCREMENT keys instead and never pass
//! through here.

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Session ids carry 32 characters, 5 bits each: 160 bits of entropy.
const SESSION_ID_LENGTH: usize = 32;

/// Generate a random Crockford Base32 string of specified length
fn generate_crockford_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..32);
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a new session id
pub fn generate_session_id() -> String {
    generate_crockford_string(SESSION_ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_session_id_length() {
        assert_eq!(generate_session_id().len(), SESSION_ID_LENGTH);
    }

    #[test]
    fn test_crockford_alphabet_only() {
        let sid = generate_session_id();
        for c in sid.chars() {
            assert!(
                CROCKFORD_ALPHABET.contains(&(c as u8)),
                "Character '{}' not in Crockford alphabet",
                c
            );
        }

        // Verify no ambiguous characters
        assert!(!sid.contains('I'));
        assert!(!sid.contains('L'));
        assert!(!sid.contains('O'));
        assert!(!sid.contains('U'));
    }

    #[test]
    fn test_uniqueness() {
        let mut ids = HashSet::new();
        for _ in 0..1000 {
            let sid = generate_session_id();
            assert!(ids.insert(sid), "Duplicate session id generated");
        }
    }
}
