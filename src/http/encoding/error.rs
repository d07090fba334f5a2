use crate::auth::{
    AccessTokenError, AccessTokenErrorKind, AuthorizationError, MaybeRedirect, Redirect,
    WithState,
};
use crate::provider::authorization::ConsentError;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

use super::reply::no_store;

#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// Reported to the user agent directly, never redirected.
    Authorization(AuthorizationError),
    Redirected(Redirect<WithState<AuthorizationError>>),
    AccessToken(AccessTokenError),
}

impl warp::reject::Reject for AuthRejection {}

impl From<AuthorizationError> for AuthRejection {
    fn from(error: AuthorizationError) -> Self {
        Self::Authorization(error)
    }
}

impl From<ConsentError> for AuthRejection {
    fn from(error: ConsentError) -> Self {
        match error {
            MaybeRedirect::Redirected(r) => Self::Redirected(r),
            MaybeRedirect::Direct(d) => Self::Authorization(d),
        }
    }
}

impl From<AccessTokenError> for AuthRejection {
    fn from(error: AccessTokenError) -> Self {
        Self::AccessToken(error)
    }
}

impl Reply for AuthRejection {
    fn into_response(self) -> warp::reply::Response {
        match self {
            AuthRejection::Authorization(e) => {
                warp::reply::with_status(e.to_string(), StatusCode::BAD_REQUEST).into_response()
            }
            AuthRejection::Redirected(r) => r.into_response(),
            AuthRejection::AccessToken(e) if e.kind == AccessTokenErrorKind::InvalidClient => {
                let resp = warp::reply::json(&e);
                let resp = warp::reply::with_status(resp, StatusCode::UNAUTHORIZED);
                let resp =
                    warp::reply::with_header(resp, "www-authenticate", r#"Basic realm="tsunagi""#);
                no_store(resp).into_response()
            }
            AuthRejection::AccessToken(e) => {
                let resp = warp::reply::json(&e);
                no_store(warp::reply::with_status(resp, StatusCode::BAD_REQUEST)).into_response()
            }
        }
    }
}

pub async fn handle_reject(err: Rejection) -> Result<impl Reply, Rejection> {
    match err.find::<AuthRejection>() {
        Some(e) => Ok(e.clone().into_response()),
        None => Err(err),
    }
}
