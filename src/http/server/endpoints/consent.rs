use std::sync::Arc;

use warp::Filter;

use crate::http::consent_page;
use crate::http::encoding::{self, reply};
use crate::provider::OAuth2Provider;

pub fn consent_endpoint(
    provider: Arc<OAuth2Provider>,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let with_provider = warp::any().map(move || provider.clone());

    let login = warp::path!("login")
        .and(warp::get())
        .and(with_provider.clone())
        .and(encoding::authorization_query())
        .and_then(|provider: Arc<OAuth2Provider>, req| async move {
            let result = provider
                .authorization_request(req)
                .await
                .map(|challenge| warp::reply::html(consent_page::render(&challenge)));
            reply::reply(result)
        });

    let submit = warp::path!("token")
        .and(warp::post())
        .and(with_provider.clone())
        .and(encoding::consent_submission())
        .and_then(|provider: Arc<OAuth2Provider>, submission| async move {
            let result = provider.consent_request(submission).await;
            reply::reply(result)
        });

    login.or(submit)
}
