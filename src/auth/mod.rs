use crate::core::types::RedirectUri;

pub mod access_token;
pub mod authorization;
pub mod error;

pub use access_token::*;
pub use authorization::*;
pub use error::ErrorResponse;

#[derive(Debug)]
pub enum MaybeRedirect<R, D> {
    Redirected(Redirect<R>),
    Direct(D),
}

#[derive(Debug, Clone)]
#[derive(serde::Serialize)]
pub struct WithState<T> {
    #[serde(flatten)]
    pub inner: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl<T> From<(T, Option<String>)> for WithState<T> {
    fn from((t, state): (T, Option<String>)) -> Self {
        Self { inner: t, state }
    }
}

/// A response delivered by sending the user agent back to the client's
/// redirection endpoint with `params` appended to its query.
#[derive(Debug, Clone)]
pub struct Redirect<T> {
    pub uri: RedirectUri,
    pub params: T,
}

impl<T> Redirect<T> {
    pub fn new(uri: RedirectUri, params: T) -> Self {
        Redirect { uri, params }
    }
}
