//! Shared request state.

use std::sync::Arc;

use crate::{
    config::Config,
    ethereum::{HttpConnector, ProviderConnector},
    services::BalanceResolver,
    types::TokenSet,
};

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Balance resolver over the reported token set.
    pub resolver: BalanceResolver,
    /// Provider endpoint, `None` when not configured.
    pub rpc_url: Option<String>,
}

impl AppState {
    pub fn new(resolver: BalanceResolver, rpc_url: Option<String>) -> Self {
        Self { resolver, rpc_url }
    }

    /// Mainnet token set over JSON-RPC/HTTP, as configured.
    ///
    /// Makes no network calls; the provider is contacted per request.
    pub fn from_config(config: &Config) -> Self {
        let connector: Arc<dyn ProviderConnector> =
            Arc::new(HttpConnector::new(config.rpc_timeout));
        let resolver = BalanceResolver::new(TokenSet::mainnet(), connector);
        Self::new(resolver, config.rpc_url.clone())
    }
}
