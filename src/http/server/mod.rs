use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use crate::provider::OAuth2Provider;

mod endpoints;

use endpoints::{consent::consent_endpoint, health::health_endpoint, oauth::oauth_endpoint};

use super::encoding::error::handle_reject;

#[derive(Debug)]
pub struct Server {
    provider: Arc<OAuth2Provider>,
}

impl Server {
    pub fn new(provider: Arc<OAuth2Provider>) -> Self {
        Self { provider }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let provider = Arc::clone(&self.provider);

        health_endpoint()
            .or(oauth_endpoint(provider.clone()))
            .or(consent_endpoint(provider))
            .recover(handle_reject)
            .with(warp::log("http-api"))
    }

    pub async fn serve(self, addr: SocketAddr) {
        warp::serve(self.routes()).run(addr).await;
    }
}
