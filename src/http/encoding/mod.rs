pub mod error;
pub mod reply;

use crate::auth::{
    AccessTokenError, AccessTokenErrorKind, AuthorizationError, AuthorizationErrorKind,
    AuthorizationRequest, ConsentSubmission, TokenRequest,
};
use http_basic_auth::Credential as BasicCredentials;
use warp::{Filter, Rejection};

use self::error::AuthRejection;

const MAX_BODY_BYTES: u64 = 16 * 1024;

fn reject_authorization(description: &'static str) -> Rejection {
    warp::reject::custom(AuthRejection::from(AuthorizationError::new(
        AuthorizationErrorKind::InvalidRequest,
        description,
    )))
}

impl TokenRequest {
    /// HTTP Basic credentials take precedence over body parameters.
    pub fn with_basic_credentials(mut self, credentials: BasicCredentials) -> Self {
        self.client_id = Some(credentials.user_id);
        self.client_secret = Some(credentials.password);
        self
    }
}

pub fn authorization_query(
) -> impl Filter<Extract = (AuthorizationRequest,), Error = Rejection> + Clone {
    warp::query::<AuthorizationRequest>().or_else(|_| async move {
        Err::<(AuthorizationRequest,), _>(reject_authorization("malformed query string"))
    })
}

pub fn consent_submission() -> impl Filter<Extract = (ConsentSubmission,), Error = Rejection> + Clone
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(
        warp::body::form::<ConsentSubmission>().or_else(|_| async move {
            Err::<(ConsentSubmission,), _>(reject_authorization("malformed form body"))
        }),
    )
}

/// Token request from a form or JSON body, with client credentials taken
/// from an `Authorization: Basic` header when one is present.
pub fn token_request() -> impl Filter<Extract = (TokenRequest,), Error = Rejection> + Clone {
    let body = warp::body::form::<TokenRequest>()
        .or(warp::body::json::<TokenRequest>())
        .unify()
        .or_else(|_| async move {
            Err::<(TokenRequest,), _>(warp::reject::custom(AuthRejection::from(
                AccessTokenError::new(AccessTokenErrorKind::InvalidRequest, "malformed request body"),
            )))
        });

    warp::body::content_length_limit(MAX_BODY_BYTES)
        .and(warp::header::optional::<String>("authorization"))
        .and(body)
        .map(|authorization: Option<String>, req: TokenRequest| {
            match authorization.and_then(|value| value.parse::<BasicCredentials>().ok()) {
                Some(credentials) => req.with_basic_credentials(credentials),
                None => req,
            }
        })
}
