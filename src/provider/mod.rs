use crate::core::types::ClientId;
use crate::http::server::Server;
use crate::store::{CodeStore, MemoryStore};
use crate::util::cli::Options;

pub mod access_token;
pub mod authorization;
pub mod error;
pub mod registry;
pub mod token;

pub use registry::{ClientRegistry, RegistryError};
pub use token::TokenService;

use std::sync::Arc;
use std::time::Duration;

use tracing::{event, Level};

#[derive(Debug)]
pub struct OAuth2Provider {
    registry: ClientRegistry,
    store: Arc<dyn CodeStore>,
    token: TokenService,
}

impl OAuth2Provider {
    pub fn new(registry: ClientRegistry, store: Arc<dyn CodeStore>, token: TokenService) -> Self {
        Self {
            registry,
            store,
            token,
        }
    }

    pub fn registry(&self) -> &ClientRegistry {
        &self.registry
    }

    fn is_registered(&self, client_id: &ClientId) -> bool {
        self.registry.contains(client_id)
    }

    /// Periodically evicts expired codes. Redemption enforces expiry on its
    /// own, so this only bounds memory.
    pub async fn start_clean_up_worker(&self, period: Duration) {
        use tokio::time::interval;

        let mut interval = interval(period);

        loop {
            interval.tick().await;
            match self.store.clean_up().await {
                Ok(0) => {}
                Ok(removed) => event!(Level::DEBUG, removed, "Evicted expired authorization codes"),
                Err(e) => event!(Level::WARN, error = %e, "Failed to evict expired authorization codes"),
            }
        }
    }
}

/// A request parameter, treating an empty value as absent.
pub(crate) fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

async fn tsunagid(options: Options) -> Result<(), String> {
    let registry = ClientRegistry::from_delimited(&options.clients).map_err(|e| e.to_string())?;
    if registry.is_empty() {
        return Err("no clients registered, set CLIENTS".to_string());
    }

    let ttl = Duration::from_secs(options.code_ttl_secs);
    let store = Arc::new(MemoryStore::new(ttl));
    let token = TokenService::new(options.code_ttl_secs);
    let provider = Arc::new(OAuth2Provider::new(registry, store, token));

    if options.clean_up_interval_secs > 0 {
        let provider = Arc::clone(&provider);
        let period = Duration::from_secs(options.clean_up_interval_secs);
        tokio::spawn(async move { provider.start_clean_up_worker(period).await });
    }

    let addr = options.socket_addr().map_err(|e| e.to_string())?;
    event!(
        Level::INFO,
        %addr,
        public_url = %options.public_url(),
        clients = provider.registry().len(),
        "OAuth2 account-linking server starting"
    );

    Server::new(provider).serve(addr).await;
    Ok(())
}

pub async fn main() -> Result<(), String> {
    use clap::Parser;

    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();
    let options = Options::parse();
    tsunagid(options).await
}
