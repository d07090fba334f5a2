use crate::core::types::{AccessToken, AuthCode, RefreshToken};

use rand::{rngs::OsRng, RngCore};

/// 128 bits.
const AUTH_CODE_BYTES: usize = 16;
/// 256 bits, rendered as 64 hex characters.
const TOKEN_BYTES: usize = 32;

pub trait FromRandom {
    fn from_random() -> Self;
}

impl FromRandom for AuthCode {
    fn from_random() -> Self {
        AuthCode(random_hex(AUTH_CODE_BYTES))
    }
}

impl FromRandom for AccessToken {
    fn from_random() -> Self {
        AccessToken(random_hex(TOKEN_BYTES))
    }
}

impl FromRandom for RefreshToken {
    fn from_random() -> Self {
        RefreshToken(random_hex(TOKEN_BYTES))
    }
}

fn random_hex(size: usize) -> String {
    let mut bytes = vec![0u8; size];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    #[test]
    fn auth_codes_carry_128_bits() {
        let code = AuthCode::from_random();
        assert_eq!(code.0.len(), 32);
        assert!(is_lower_hex(&code.0));
    }

    #[test]
    fn tokens_are_64_hex_characters() {
        let AccessToken(access) = AccessToken::from_random();
        let RefreshToken(refresh) = RefreshToken::from_random();
        assert_eq!(access.len(), 64);
        assert_eq!(refresh.len(), 64);
        assert!(is_lower_hex(&access));
        assert_ne!(access, refresh);
    }
}
