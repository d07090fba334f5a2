use std::convert::TryFrom;

use crate::{
    auth::{
        AuthorizationCodeResponse, AuthorizationError, AuthorizationErrorKind,
        AuthorizationRequest, ConsentAction, ConsentChallenge, ConsentSubmission, MaybeRedirect,
        Redirect, ValidatedAuthorization, WithState,
    },
    core::types::{ClientId, RedirectUri},
    provider::error::ResultExt,
};

use tracing::{event, Level};

use super::{required, OAuth2Provider};

pub type ConsentError = MaybeRedirect<WithState<AuthorizationError>, AuthorizationError>;

impl OAuth2Provider {
    /// Checks, in order: both parameters present, client registered,
    /// redirection endpoint usable. Nothing is stored.
    pub fn validate_authorization(
        &self,
        req: &AuthorizationRequest,
    ) -> Result<ValidatedAuthorization, AuthorizationError> {
        let (client_id, redirect_uri) = match (required(&req.client_id), required(&req.redirect_uri)) {
            (Some(client_id), Some(redirect_uri)) => (client_id, redirect_uri),
            _ => {
                return Err(AuthorizationError::new(
                    AuthorizationErrorKind::InvalidRequest,
                    "missing required parameters: client_id and redirect_uri",
                ))
            }
        };

        let client_id = ClientId(client_id.to_string());
        if !self.is_registered(&client_id) {
            event!(Level::WARN, %client_id, "Authorization request for unknown client");
            return Err(AuthorizationError::new(
                AuthorizationErrorKind::InvalidClient,
                "unknown client_id",
            ));
        }

        let redirect_uri = RedirectUri::try_from(redirect_uri).map_err(|e| {
            AuthorizationError::new(AuthorizationErrorKind::InvalidRequest, e.to_string())
        })?;

        Ok(ValidatedAuthorization {
            client_id,
            redirect_uri,
            state: req.state.clone(),
        })
    }

    #[tracing::instrument(skip_all, fields(client_id = ?req.client_id))]
    pub async fn authorization_request(
        &self,
        req: AuthorizationRequest,
    ) -> Result<ConsentChallenge, AuthorizationError> {
        let validated = self.validate_authorization(&req)?;

        event!(Level::DEBUG, "Forwarding authorization request to consent");
        Ok(validated.into())
    }

    /// Completes the consent step: on approval a code is issued and the user
    /// agent is sent back to the client with `code` and, if supplied, `state`.
    #[tracing::instrument(skip_all, fields(client_id = ?submission.client_id, action = ?submission.action))]
    pub async fn consent_request(
        &self,
        submission: ConsentSubmission,
    ) -> Result<Redirect<AuthorizationCodeResponse>, ConsentError> {
        let ValidatedAuthorization {
            client_id,
            redirect_uri,
            state,
        } = self
            .validate_authorization(&submission.request())
            .without_redirect::<WithState<AuthorizationError>>()?;

        if submission.action == ConsentAction::Deny {
            event!(Level::INFO, "User denied authorization");
            let denied: Result<Redirect<AuthorizationCodeResponse>, AuthorizationError> =
                Err(AuthorizationErrorKind::AccessDenied.into());
            return denied
                .add_state_context(&state)
                .add_redirect_context(redirect_uri);
        }

        let data = self
            .store
            .issue(&client_id)
            .await
            .map_err(|e| {
                event!(Level::ERROR, error = %e, "Failed to issue authorization code");
                AuthorizationError::from(AuthorizationErrorKind::ServerError)
            })
            .add_state_context(&state)
            .add_redirect_context::<AuthorizationError>(redirect_uri.clone())?;

        event!(Level::INFO, "Issued authorization code");
        Ok(AuthorizationCodeResponse::new(data.code, state)).redirect_ok(redirect_uri)
    }
}
