use rand::{Rng as _, distr::Alphanumeric};

/// Random alphanumeric code of `length` characters.
pub fn generate_invite_code(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Codes compare case-insensitively after trimming surrounding whitespace.
pub fn invite_codes_match(stored: &str, supplied: &str) -> bool {
    stored.trim().to_lowercase() == supplied.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        let code = generate_invite_code(12);

        assert_eq!(code.len(), 12);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_codes_differ() {
        assert_ne!(generate_invite_code(12), generate_invite_code(12));
    }

    #[test]
    fn test_match_ignores_case_and_surrounding_whitespace() {
        for supplied in ["ABC123 ", "abc123", "ABC123", "  aBc123\n"] {
            assert!(
                invite_codes_match("abc123", supplied),
                "'{supplied}' should match"
            );
        }
    }

    #[test]
    fn test_mismatch() {
        assert!(!invite_codes_match("abc123", "abc124"));
        assert!(!invite_codes_match("abc123", "abc 123"));
        assert!(!invite_codes_match("abc123", ""));
    }
}
