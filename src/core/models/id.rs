//! Opaque identifier generation

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a unique opaque identifier for terms and courses.
///
/// Combines 64 bits of entropy with a millisecond timestamp, both
/// hex-encoded. Collision probability within the lifetime of one board
/// document is negligible, and no coordination or persisted counter is
/// needed.
#[must_use]
pub fn new_id() -> String {
    let entropy: u64 = rand::random();
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis());
    format!("{entropy:016x}{millis:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_id_is_hex() {
        let id = new_id();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
