//! Provider abstractions used by the balance resolver.
//!
//! `TokenReader` answers the two ERC20 read calls; `ProviderConnector` turns
//! an endpoint URL into a reader. Both exist so the resolver can be driven
//! by mock implementations in tests.

use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
    time::Duration,
};

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use super::EthereumClient;
use crate::error::Result;

/// Read-only ERC20 queries against a chain-state provider.
#[async_trait]
pub trait TokenReader: Send + Sync {
    /// `balanceOf(account)` on the given token contract.
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256>;

    /// `decimals()` on the given token contract.
    async fn decimals(&self, token: Address) -> Result<u8>;
}

/// Creates a `TokenReader` for a provider endpoint.
pub trait ProviderConnector: Send + Sync {
    /// Build a reader for `endpoint`. Must not perform network I/O.
    fn connect(&self, endpoint: &str) -> Result<Arc<dyn TokenReader>>;
}

/// Connector producing JSON-RPC over HTTP clients.
///
/// One client is kept per endpoint so requests share the transport's
/// connection pool.
pub struct HttpConnector {
    timeout: Duration,
    clients: RwLock<HashMap<String, Arc<EthereumClient>>>,
}

impl HttpConnector {
    /// Create a connector whose clients time out each call after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, clients: RwLock::new(HashMap::new()) }
    }
}

impl ProviderConnector for HttpConnector {
    fn connect(&self, endpoint: &str) -> Result<Arc<dyn TokenReader>> {
        let cached =
            self.clients.read().unwrap_or_else(PoisonError::into_inner).get(endpoint).cloned();
        if let Some(client) = cached {
            return Ok(client);
        }

        let mut clients = self.clients.write().unwrap_or_else(PoisonError::into_inner);
        let client = match clients.get(endpoint) {
            Some(client) => client.clone(),
            None => {
                let client = Arc::new(EthereumClient::new(endpoint, self.timeout)?);
                clients.insert(endpoint.to_string(), client.clone());
                client
            }
        };

        Ok(client)
    }
}
