use crate::core::models::AuthCodeData;
use crate::core::types::{AuthCode, ClientId};

pub mod memory;

pub use memory::MemoryStore;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("authorization code not found")]
    NotFound,
    #[error("authorization code expired")]
    Expired,
    #[error("authorization code was issued to another client")]
    ClientMismatch,
    #[error("code store unavailable: {0}")]
    Unavailable(String),
}

/// Owner of all outstanding authorization codes.
///
/// `issue` and `consume` must be atomic with respect to each other: of any
/// number of concurrent `consume` calls for one code, at most one succeeds,
/// and a successful `consume` removes the entry in the same step. Expiry is
/// evaluated when a code is redeemed; `clean_up` only reclaims memory and
/// must take the same lock as `consume`.
#[async_trait::async_trait]
pub trait CodeStore: std::fmt::Debug + Send + Sync {
    async fn issue(&self, client_id: &ClientId) -> Result<AuthCodeData, CodeError>;
    async fn consume(
        &self,
        code: &AuthCode,
        client_id: &ClientId,
    ) -> Result<AuthCodeData, CodeError>;
    async fn clean_up(&self) -> Result<usize, CodeError>;
}
