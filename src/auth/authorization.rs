use crate::core::types::{AuthCode, ClientId, RedirectUri};

use super::error::{ErrorCode, ErrorResponse};

pub type AuthorizationError = ErrorResponse<AuthorizationErrorKind>;

/// Query of `GET /auth` and `GET /login`. Every field is optional on the
/// wire so that absence is reported as `invalid_request` instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default)]
#[derive(serde::Deserialize)]
pub struct AuthorizationRequest {
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub state: Option<String>,
}

/// Form body of `POST /token`, submitted by the consent page.
#[derive(Debug, Clone, Default)]
#[derive(serde::Deserialize)]
pub struct ConsentSubmission {
    pub client_id: Option<String>,
    pub redirect_uri: Option<String>,
    pub state: Option<String>,
    #[serde(default)]
    pub action: ConsentAction,
}

impl ConsentSubmission {
    pub fn request(&self) -> AuthorizationRequest {
        AuthorizationRequest {
            client_id: self.client_id.clone(),
            redirect_uri: self.redirect_uri.clone(),
            state: self.state.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentAction {
    Approve,
    Deny,
}

impl Default for ConsentAction {
    fn default() -> Self {
        Self::Approve
    }
}

/// An authorization request whose client is registered and whose
/// redirection endpoint is a usable absolute URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAuthorization {
    pub client_id: ClientId,
    pub redirect_uri: RedirectUri,
    pub state: Option<String>,
}

/// Parameters forwarded from `/auth` to the consent step.
#[derive(Debug, Clone)]
#[derive(serde::Serialize)]
pub struct ConsentChallenge {
    pub client_id: ClientId,
    pub redirect_uri: RedirectUri,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl From<ValidatedAuthorization> for ConsentChallenge {
    fn from(req: ValidatedAuthorization) -> Self {
        Self {
            client_id: req.client_id,
            redirect_uri: req.redirect_uri,
            state: req.state,
        }
    }
}

#[derive(Debug, Clone)]
#[derive(serde::Serialize)]
pub struct AuthorizationCodeResponse {
    code: AuthCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<String>,
}

impl AuthorizationCodeResponse {
    pub fn new(code: AuthCode, state: Option<String>) -> Self {
        Self { code, state }
    }

    pub fn code(&self) -> &AuthCode {
        &self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationErrorKind {
    InvalidRequest,
    InvalidClient,
    AccessDenied,
    ServerError,
}

impl ErrorCode for AuthorizationErrorKind {
    fn code(&self) -> &'static str {
        use AuthorizationErrorKind::*;

        match self {
            InvalidRequest => "invalid_request",
            InvalidClient => "invalid_client",
            AccessDenied => "access_denied",
            ServerError => "server_error",
        }
    }
}

impl From<AuthorizationErrorKind> for AuthorizationError {
    fn from(kind: AuthorizationErrorKind) -> Self {
        Self {
            kind,
            description: None,
            uri: None,
        }
    }
}
