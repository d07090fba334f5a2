use std::collections::{hash_map::Entry, HashMap};
use std::time::{Duration, SystemTime};

use tokio::sync::Mutex;
use tracing::{event, Level};

use super::{CodeError, CodeStore};
use crate::core::models::AuthCodeData;
use crate::core::types::{AuthCode, ClientId, Expiry};
use crate::util::random::FromRandom;

/// Process-lifetime code store guarded by a single mutex.
#[derive(Debug)]
pub struct MemoryStore {
    codes: Mutex<HashMap<AuthCode, AuthCodeData>>,
    ttl: Duration,
}

impl MemoryStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            codes: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn len(&self) -> usize {
        self.codes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn issue_at(&self, client_id: &ClientId, now: SystemTime) -> AuthCodeData {
        let mut codes = self.codes.lock().await;

        loop {
            match codes.entry(AuthCode::from_random()) {
                Entry::Occupied(_) => {
                    event!(Level::WARN, "Generated authorization code collided, retrying");
                }
                Entry::Vacant(slot) => {
                    let data = AuthCodeData {
                        code: slot.key().clone(),
                        client_id: client_id.clone(),
                        issued_at: now,
                        expires_at: Expiry::after(now, self.ttl),
                    };
                    return slot.insert(data).clone();
                }
            }
        }
    }

    pub async fn consume_at(
        &self,
        code: &AuthCode,
        client_id: &ClientId,
        now: SystemTime,
    ) -> Result<AuthCodeData, CodeError> {
        let data = self
            .codes
            .lock()
            .await
            .remove(code)
            .ok_or(CodeError::NotFound)?;

        if data.is_expired(now) {
            return Err(CodeError::Expired);
        }

        if &data.client_id != client_id {
            event!(
                Level::WARN,
                issued_to = %data.client_id,
                presented_by = %client_id,
                "Authorization code presented by a different client"
            );
            return Err(CodeError::ClientMismatch);
        }

        Ok(data)
    }

    pub async fn clean_up_at(&self, now: SystemTime) -> usize {
        let mut codes = self.codes.lock().await;
        let before = codes.len();
        codes.retain(|_, data| !data.is_expired(now));
        before - codes.len()
    }
}

#[async_trait::async_trait]
impl CodeStore for MemoryStore {
    async fn issue(&self, client_id: &ClientId) -> Result<AuthCodeData, CodeError> {
        Ok(self.issue_at(client_id, SystemTime::now()).await)
    }

    async fn consume(
        &self,
        code: &AuthCode,
        client_id: &ClientId,
    ) -> Result<AuthCodeData, CodeError> {
        self.consume_at(code, client_id, SystemTime::now()).await
    }

    async fn clean_up(&self) -> Result<usize, CodeError> {
        Ok(self.clean_up_at(SystemTime::now()).await)
    }
}
