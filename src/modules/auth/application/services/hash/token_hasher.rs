use sha2::{Digest, Sha256};

/// Fingerprint of a session token. The blacklist never keeps raw tokens.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_token_same_fingerprint() {
        assert_eq!(hash_token("session.abc"), hash_token("session.abc"));
    }

    #[test]
    fn test_different_tokens_differ() {
        assert_ne!(hash_token("session.abc"), hash_token("session.abd"));
    }

    #[test]
    fn test_fingerprint_is_hex_sha256() {
        let hash = hash_token("any_token");

        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
