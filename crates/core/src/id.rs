//! Opaque unique identifiers for layouts, slots and categories.

use rand::Rng;
use std::time::{SystemTime, UNIX_EPOCH};

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random characters appended after the timestamp prefix.
const SUFFIX_LEN: usize = 11;

/// Generate a new opaque identifier.
///
/// Millisecond Unix timestamp rendered in base36, followed by a random
/// base36 suffix. Unique within a running process at practical call rates;
/// not suitable as a cryptographic token.
pub fn new_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut id = to_base36(millis);
    let mut rng = rand::thread_rng();
    for _ in 0..SUFFIX_LEN {
        let index = rng.gen_range(0..ALPHABET.len());
        id.push(ALPHABET[index] as char);
    }
    id
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(ALPHABET[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // ALPHABET bytes are ASCII, so this cannot fail.
    String::from_utf8(digits).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_at_practical_rates() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn ids_are_lowercase_alphanumeric() {
        let id = new_id();
        assert!(id.len() > SUFFIX_LEN);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn base36_round_trips_known_values() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46655), "zzz");
    }
}
