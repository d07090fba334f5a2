use crate::auth::TokenType;
use crate::core::models::IssuedToken;
use crate::core::types::{AccessToken, ClientId, RefreshToken};
use crate::util::random::FromRandom;

use tracing::{event, Level};

/// Mints opaque bearer tokens. Tokens are not recorded server-side.
#[derive(Debug, Clone)]
pub struct TokenService {
    expires_in: u64,
}

impl TokenService {
    pub fn new(expires_in: u64) -> Self {
        Self { expires_in }
    }

    pub fn token_type() -> TokenType {
        TokenType::Bearer
    }

    #[tracing::instrument(skip(self))]
    pub fn new_token(&self, client_id: &ClientId) -> IssuedToken {
        event!(Level::DEBUG, expires_in = self.expires_in, "Issuing access_token");
        IssuedToken {
            access_token: AccessToken::from_random(),
            refresh_token: RefreshToken::from_random(),
            expires_in: self.expires_in,
        }
    }
}
