use crate::core::types::{AccessToken, ClientId, ClientSecret, RefreshToken};

use super::error::{ErrorCode, ErrorResponse};

pub type AccessTokenError = ErrorResponse<AccessTokenErrorKind>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum TokenType {
    Bearer,
}

/// Body of `POST /token/exchange`. Fields stay optional so the exchange
/// can report which precondition failed in the order it checks them.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct TokenRequest {
    pub grant_type: Option<String>,
    pub code: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClientCredentials {
    pub client_id: ClientId,
    pub client_secret: ClientSecret,
}

#[derive(serde::Serialize, Debug)]
pub struct AccessTokenResponse {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
    pub token_type: TokenType,
    pub expires_in: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTokenErrorKind {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnsupportedGrantType,
}

impl ErrorCode for AccessTokenErrorKind {
    fn code(&self) -> &'static str {
        use AccessTokenErrorKind::*;

        match self {
            InvalidRequest => "invalid_request",
            InvalidClient => "invalid_client",
            InvalidGrant => "invalid_grant",
            UnsupportedGrantType => "unsupported_grant_type",
        }
    }
}

impl From<AccessTokenErrorKind> for AccessTokenError {
    fn from(kind: AccessTokenErrorKind) -> Self {
        Self {
            kind,
            description: None,
            uri: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_serializes_with_oauth_field_names() {
        let error = AccessTokenError::new(AccessTokenErrorKind::InvalidGrant, "bad code");
        let json = serde_json::to_value(&error).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"error": "invalid_grant", "error_description": "bad code"})
        );
    }

    #[test]
    fn error_kind_codes_match_serde_names() {
        use AccessTokenErrorKind::*;

        for kind in &[InvalidRequest, InvalidClient, InvalidGrant, UnsupportedGrantType] {
            let json = serde_json::to_value(kind).expect("serialize");
            assert_eq!(json, serde_json::Value::String(kind.code().to_string()));
        }
    }

    #[test]
    fn token_type_serializes_as_bearer() {
        assert_eq!(
            serde_json::to_value(TokenType::Bearer).expect("serialize"),
            serde_json::json!("Bearer")
        );
    }
}
