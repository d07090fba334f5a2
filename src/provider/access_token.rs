use crate::auth::{
    AccessTokenError, AccessTokenErrorKind, AccessTokenResponse, ClientCredentials, TokenRequest,
};
use crate::core::types::{AuthCode, ClientId, ClientSecret, GrantType};
use crate::provider::token::TokenService;

use super::{required, OAuth2Provider};

use tracing::{event, Level};

impl OAuth2Provider {
    fn check_client_authentication(
        &self,
        credentials: &ClientCredentials,
    ) -> Result<(), AccessTokenError> {
        if self.registry.authenticate(credentials) {
            return Ok(());
        }

        event!(
            Level::WARN,
            client_id = %credentials.client_id,
            "Client authentication failed"
        );
        Err(AccessTokenError::new(
            AccessTokenErrorKind::InvalidClient,
            "client authentication failed",
        ))
    }

    /// Redeems an authorization code. Each check runs once, in order, and the
    /// first failure ends the exchange: grant type, request completeness,
    /// client authentication, then code redemption.
    #[tracing::instrument(skip_all, fields(client_id = ?req.client_id))]
    pub async fn access_token_request(
        &self,
        req: TokenRequest,
    ) -> Result<AccessTokenResponse, AccessTokenError> {
        event!(Level::TRACE, "Handling access token request");

        let grant_type = req
            .grant_type
            .as_deref()
            .unwrap_or_default()
            .parse::<GrantType>()
            .map_err(|e| {
                AccessTokenError::new(AccessTokenErrorKind::UnsupportedGrantType, e.to_string())
            })?;

        match grant_type {
            GrantType::AuthorizationCode => self.authorization_code_grant(req).await,
        }
    }

    async fn authorization_code_grant(
        &self,
        req: TokenRequest,
    ) -> Result<AccessTokenResponse, AccessTokenError> {
        event!(Level::TRACE, "Handling authorization_code grant");

        let (code, client_id, client_secret) = match (
            required(&req.code),
            required(&req.client_id),
            required(&req.client_secret),
        ) {
            (Some(code), Some(client_id), Some(client_secret)) => {
                (code, client_id, client_secret)
            }
            _ => {
                return Err(AccessTokenError::new(
                    AccessTokenErrorKind::InvalidRequest,
                    "missing required parameters: code, client_id and client_secret",
                ))
            }
        };

        let credentials = ClientCredentials {
            client_id: ClientId(client_id.to_string()),
            client_secret: ClientSecret(client_secret.to_string()),
        };
        self.check_client_authentication(&credentials)?;

        let data = self
            .store
            .consume(&AuthCode(code.to_string()), &credentials.client_id)
            .await
            .map_err(|e| {
                // Callers only ever see invalid_grant.
                event!(Level::WARN, reason = %e, "Rejected authorization code");
                AccessTokenError::new(
                    AccessTokenErrorKind::InvalidGrant,
                    "invalid authorization code",
                )
            })?;

        let token = self.token.new_token(&data.client_id);
        event!(Level::INFO, "Redeemed authorization code");

        Ok(AccessTokenResponse {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            token_type: TokenService::token_type(),
            expires_in: token.expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::tests::provider;
    use crate::store::CodeStore;

    const CLIENT: &str = "alexa-button-skill";

    fn exchange(grant_type: &str, code: &str, client_id: &str, secret: &str) -> TokenRequest {
        let field = |v: &str| Some(v.to_string());
        TokenRequest {
            grant_type: field(grant_type),
            code: field(code),
            client_id: field(client_id),
            client_secret: field(secret),
        }
    }

    async fn issue(store: &crate::store::MemoryStore, client_id: &str) -> String {
        store
            .issue(&ClientId(client_id.to_string()))
            .await
            .expect("issue")
            .code
            .0
    }

    fn kind(result: Result<AccessTokenResponse, AccessTokenError>) -> AccessTokenErrorKind {
        result.expect_err("exchange should fail").kind
    }

    #[tokio::test]
    async fn exchanges_code_for_bearer_token() {
        let (provider, store) = provider();
        let code = issue(&store, CLIENT).await;

        let response = provider
            .access_token_request(exchange("authorization_code", &code, CLIENT, "secret"))
            .await
            .expect("exchange succeeds");

        assert_eq!(response.token_type, crate::auth::TokenType::Bearer);
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.access_token.0.len(), 64);
        assert_eq!(response.refresh_token.0.len(), 64);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn second_redemption_is_invalid_grant() {
        let (provider, store) = provider();
        let code = issue(&store, CLIENT).await;
        let req = || exchange("authorization_code", &code, CLIENT, "secret");

        assert!(provider.access_token_request(req()).await.is_ok());
        assert_eq!(
            kind(provider.access_token_request(req()).await),
            AccessTokenErrorKind::InvalidGrant
        );
    }

    #[tokio::test]
    async fn grant_type_is_checked_before_anything_else() {
        let (provider, store) = provider();
        let code = issue(&store, CLIENT).await;

        let cases = vec![
            exchange("client_credentials", &code, CLIENT, "secret"),
            exchange("refresh_token", "", "", ""),
            TokenRequest::default(),
        ];
        for req in cases {
            assert_eq!(
                kind(provider.access_token_request(req).await),
                AccessTokenErrorKind::UnsupportedGrantType
            );
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn incomplete_request_is_invalid_request() {
        let (provider, store) = provider();
        let code = issue(&store, CLIENT).await;

        let cases = vec![
            exchange("authorization_code", "", CLIENT, "secret"),
            exchange("authorization_code", &code, "", "secret"),
            exchange("authorization_code", &code, CLIENT, ""),
        ];
        for req in cases {
            assert_eq!(
                kind(provider.access_token_request(req).await),
                AccessTokenErrorKind::InvalidRequest
            );
        }
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn bad_client_credentials_leave_code_redeemable() {
        let (provider, store) = provider();
        let code = issue(&store, CLIENT).await;

        assert_eq!(
            kind(
                provider
                    .access_token_request(exchange("authorization_code", &code, CLIENT, "wrong"))
                    .await
            ),
            AccessTokenErrorKind::InvalidClient
        );
        assert_eq!(
            kind(
                provider
                    .access_token_request(exchange("authorization_code", &code, "nobody", "secret"))
                    .await
            ),
            AccessTokenErrorKind::InvalidClient
        );
        assert!(provider
            .access_token_request(exchange("authorization_code", &code, CLIENT, "secret"))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn code_issued_to_other_client_is_invalid_grant() {
        let (provider, store) = provider();
        let code = issue(&store, "other-skill").await;

        let result = provider
            .access_token_request(exchange("authorization_code", &code, CLIENT, "secret"))
            .await;
        let error = result.expect_err("mismatched client");
        assert_eq!(error.kind, AccessTokenErrorKind::InvalidGrant);
        assert_eq!(error.description.as_deref(), Some("invalid authorization code"));
    }

    #[tokio::test]
    async fn failure_reasons_are_indistinguishable() {
        let (provider, store) = provider();
        let foreign = issue(&store, "other-skill").await;

        let unknown = provider
            .access_token_request(exchange("authorization_code", "deadbeef", CLIENT, "secret"))
            .await
            .expect_err("unknown code");
        let mismatched = provider
            .access_token_request(exchange("authorization_code", &foreign, CLIENT, "secret"))
            .await
            .expect_err("foreign code");

        assert_eq!(unknown, mismatched);
    }
}
