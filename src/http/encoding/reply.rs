use super::error::AuthRejection;
use warp::reply::{Reply, Response};
use warp::Rejection;

/// Marks a response as carrying credentials that must not be cached.
pub fn no_store(reply: impl Reply) -> impl Reply {
    let reply = warp::reply::with_header(reply, "cache-control", "no-store");
    warp::reply::with_header(reply, "pragma", "no-cache")
}

pub fn json_encode(
    value: Result<impl serde::Serialize, impl Into<AuthRejection>>,
) -> Result<impl Reply, Rejection> {
    value
        .map(|v| no_store(warp::reply::json(&v)))
        .map_err(|e| warp::reject::custom::<AuthRejection>(e.into()))
}

pub fn reply<T, E>(result: Result<T, E>) -> Result<Response, Rejection>
where
    T: Reply,
    E: Into<AuthRejection>,
{
    result
        .map(|t| t.into_response())
        .map_err(|e| warp::reject::custom(e.into()))
}
