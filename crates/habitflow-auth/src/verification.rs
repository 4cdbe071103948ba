//! Email verification token generation.

use rand::RngExt;

/// Length of generated verification tokens.
const TOKEN_LENGTH: usize = 48;

/// Alphabet for verification tokens. URL-safe so tokens can be embedded
/// in links without escaping.
const TOKEN_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random URL-safe email verification token.
pub fn generate_verification_token() -> String {
    let mut rng = rand::rng();
    (0..TOKEN_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            TOKEN_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shape() {
        let token = generate_verification_token();
        assert_eq!(token.len(), TOKEN_LENGTH);
        assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_tokens_are_unique() {
        assert_ne!(generate_verification_token(), generate_verification_token());
    }
}
