use std::sync::Arc;

use warp::Filter;

use crate::http::encoding::{self, reply};
use crate::provider::OAuth2Provider;

pub fn oauth_endpoint(
    provider: Arc<OAuth2Provider>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_provider = warp::any().map(move || provider.clone());

    // Validates, then hands the user agent to the consent step
    let authorize = warp::path!("auth")
        .and(warp::get())
        .and(with_provider.clone())
        .and(encoding::authorization_query())
        .and_then(|provider: Arc<OAuth2Provider>, req| async move {
            let result = provider.authorization_request(req).await;
            reply::reply(result)
        });

    // Either a direct success or a direct error
    let exchange = warp::path!("token" / "exchange")
        .and(warp::post())
        .and(with_provider.clone())
        .and(encoding::token_request())
        .and_then(|provider: Arc<OAuth2Provider>, req| async move {
            let result = provider.access_token_request(req).await;
            reply::json_encode(result)
        });

    authorize.or(exchange)
}
