use warp::Filter;

pub fn health_endpoint(
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .map(|| "OAuth2 account-linking server is running")
}
