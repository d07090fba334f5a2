use crate::auth::{MaybeRedirect, Redirect, WithState};
use crate::core::types::RedirectUri;

pub trait ResultExt<T, E> {
    fn redirect_ok(self, uri: RedirectUri) -> Result<Redirect<T>, E>;
    fn without_redirect<R>(self) -> Result<T, MaybeRedirect<R, E>>;
    fn add_redirect_context<D>(self, uri: RedirectUri) -> Result<T, MaybeRedirect<E, D>>;
    fn add_state_context(self, state: &Option<String>) -> Result<T, WithState<E>>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn redirect_ok(self, uri: RedirectUri) -> Result<Redirect<T>, E> {
        self.map(|o| Redirect::new(uri, o))
    }

    fn without_redirect<R>(self) -> Result<T, MaybeRedirect<R, E>> {
        self.map_err(MaybeRedirect::Direct)
    }

    fn add_redirect_context<D>(self, uri: RedirectUri) -> Result<T, MaybeRedirect<E, D>> {
        self.map_err(|e| MaybeRedirect::Redirected(Redirect::new(uri, e)))
    }

    fn add_state_context(self, state: &Option<String>) -> Result<T, WithState<E>> {
        self.map_err(|e| WithState {
            state: state.clone(),
            inner: e,
        })
    }
}
