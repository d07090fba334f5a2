use crate::auth::{ConsentChallenge, Redirect};
use crate::core::types::RedirectUri;
use url::Url;
use warp::http::StatusCode;
use warp::reply::{Reply, Response};

/// Path of the consent step that `/auth` forwards to.
pub const LOGIN_PATH: &str = "/login";

fn append_params(
    r: &RedirectUri,
    p: impl serde::Serialize,
) -> Result<Url, serde_urlencoded::ser::Error> {
    let mut url = r.as_url().clone();
    let new_qs = serde_urlencoded::to_string(p)?;
    let pairs = form_urlencoded::parse(new_qs.as_bytes());
    url.query_pairs_mut().extend_pairs(pairs);
    Ok(url)
}

fn found(location: String) -> Response {
    warp::reply::with_header(
        warp::reply::with_status(warp::reply(), StatusCode::FOUND),
        "location",
        location,
    )
    .into_response()
}

impl<T: serde::Serialize + Send> Reply for Redirect<T> {
    fn into_response(self) -> Response {
        match append_params(&self.uri, self.params) {
            Ok(url) => found(url.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode redirect parameters");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

impl Reply for ConsentChallenge {
    fn into_response(self) -> Response {
        match serde_urlencoded::to_string(&self) {
            Ok(query) => found(format!("{}?{}", LOGIN_PATH, query)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode consent parameters");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
