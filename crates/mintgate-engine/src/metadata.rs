//! Metadata URI composition.

use mintgate_types::TokenId;

/// Compose a token's metadata URI as `base || token_id`.
#[must_use]
pub fn token_uri(base: &str, token_id: TokenId) -> String {
    format!("{base}{token_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_token_number() {
        assert_eq!(
            token_uri("https://example.io/collection/", TokenId(101)),
            "https://example.io/collection/101"
        );
    }

    #[test]
    fn empty_base_is_just_the_number() {
        assert_eq!(token_uri("", TokenId(7)), "7");
    }
}
