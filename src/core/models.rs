use std::time::SystemTime;

use super::types::*;

#[derive(Debug, Clone)]
pub struct ClientRegistration {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
}

/// An outstanding authorization code. Redeeming it removes it from the
/// store, so a live entry is by construction unconsumed.
#[derive(Debug, Clone)]
pub struct AuthCodeData {
    pub code: AuthCode,
    pub client_id: ClientId,
    pub issued_at: SystemTime,
    pub expires_at: Expiry,
}

impl AuthCodeData {
    pub fn is_expired(&self, now: SystemTime) -> bool {
        self.expires_at.has_passed(now)
    }
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    pub expires_in: u64,
}
