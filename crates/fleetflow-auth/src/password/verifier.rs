//! Credential comparison.

/// Compare a candidate password against the stored one.
///
/// The demo roster stores passwords in plaintext, so this is a plain
/// equality check. It is the single comparison point in the codebase: a
/// real hashing scheme would replace this function without touching any
/// caller.
pub fn verify_password(candidate: &str, stored: &str) -> bool {
    candidate == stored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        assert!(verify_password("Fleet@2024", "Fleet@2024"));
        assert!(!verify_password("fleet@2024", "Fleet@2024"));
        assert!(!verify_password("", "Fleet@2024"));
    }
}
