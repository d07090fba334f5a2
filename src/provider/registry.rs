use std::collections::HashMap;
use std::str::FromStr;

use subtle::ConstantTimeEq;

use crate::auth::ClientCredentials;
use crate::core::models::ClientRegistration;
use crate::core::types::{ClientId, ClientSecret};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("client registration {0:?} is not of the form client_id:client_secret")]
    Malformed(String),
    #[error("client {0} is registered more than once")]
    Duplicate(ClientId),
}

impl FromStr for ClientRegistration {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once(':') {
            Some((id, secret)) if !id.is_empty() && !secret.is_empty() => Ok(Self {
                client_id: ClientId(id.to_string()),
                client_secret: ClientSecret(secret.to_string()),
            }),
            _ => Err(RegistryError::Malformed(s.to_string())),
        }
    }
}

/// Registered clients, fixed for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct ClientRegistry {
    clients: HashMap<ClientId, ClientSecret>,
}

impl ClientRegistry {
    pub fn new(
        registrations: impl IntoIterator<Item = ClientRegistration>,
    ) -> Result<Self, RegistryError> {
        let mut clients = HashMap::new();
        for ClientRegistration {
            client_id,
            client_secret,
        } in registrations
        {
            if clients.contains_key(&client_id) {
                return Err(RegistryError::Duplicate(client_id));
            }
            clients.insert(client_id, client_secret);
        }
        Ok(Self { clients })
    }

    /// Parses a comma-separated list of `client_id:client_secret` entries.
    pub fn from_delimited(raw: &str) -> Result<Self, RegistryError> {
        let registrations = raw
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<ClientRegistration>, _>>()?;
        Self::new(registrations)
    }

    pub fn lookup(&self, client_id: &ClientId) -> Option<&ClientSecret> {
        self.clients.get(client_id)
    }

    pub fn contains(&self, client_id: &ClientId) -> bool {
        self.clients.contains_key(client_id)
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn authenticate(&self, credentials: &ClientCredentials) -> bool {
        match self.lookup(&credentials.client_id) {
            Some(secret) => secret
                .as_ref()
                .as_bytes()
                .ct_eq(credentials.client_secret.as_ref().as_bytes())
                .into(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(id: &str, secret: &str) -> ClientCredentials {
        ClientCredentials {
            client_id: ClientId(id.to_string()),
            client_secret: ClientSecret(secret.to_string()),
        }
    }

    #[test]
    fn parses_delimited_registrations() {
        let registry = ClientRegistry::from_delimited("alexa-button-skill:secret, other:pa:ss")
            .expect("valid registrations");

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.lookup(&ClientId("alexa-button-skill".to_string())),
            Some(&ClientSecret("secret".to_string()))
        );
        assert_eq!(
            registry.lookup(&ClientId("other".to_string())),
            Some(&ClientSecret("pa:ss".to_string()))
        );
        assert_eq!(registry.lookup(&ClientId("missing".to_string())), None);
    }

    #[test]
    fn rejects_malformed_and_duplicate_registrations() {
        assert!(matches!(
            ClientRegistry::from_delimited("no-secret"),
            Err(RegistryError::Malformed(_))
        ));
        assert!(matches!(
            ClientRegistry::from_delimited(":secret"),
            Err(RegistryError::Malformed(_))
        ));
        assert_eq!(
            ClientRegistry::from_delimited("a:x,a:y").map(|r| r.len()),
            Err(RegistryError::Duplicate(ClientId("a".to_string())))
        );
    }

    #[test]
    fn authenticates_only_matching_secrets() {
        let registry = ClientRegistry::from_delimited("a:secret").expect("valid");

        assert!(registry.authenticate(&credentials("a", "secret")));
        assert!(!registry.authenticate(&credentials("a", "secret2")));
        assert!(!registry.authenticate(&credentials("a", "")));
        assert!(!registry.authenticate(&credentials("b", "secret")));
    }
}
