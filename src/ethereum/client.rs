//! Ethereum RPC client.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
};
use async_trait::async_trait;

use super::{contracts::erc20::IERC20, reader::TokenReader};
use crate::error::{AppError, Result};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper with a per-call timeout.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// Upper bound for a single contract call.
    timeout: Duration,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first query is performed.
    pub fn new(rpc_url: &str, timeout: Duration) -> Result<Self> {
        let url = rpc_url.parse().map_err(|_| {
            AppError::ProviderQueryFailed(format!("Invalid RPC URL: {}", rpc_url))
        })?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::debug!(rpc_url = %rpc_url, timeout = ?timeout, "Ethereum client created");

        Ok(Self { provider: Arc::new(provider), timeout })
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Run a contract call, failing if it outlives the configured timeout.
    async fn timed<T, F>(&self, call: &str, fut: F) -> Result<T>
    where
        F: IntoFuture<Output = std::result::Result<T, alloy::contract::Error>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(AppError::ProviderQueryFailed(format!(
                "{} timed out after {:?}",
                call, self.timeout
            ))),
        }
    }
}

#[async_trait]
impl TokenReader for EthereumClient {
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256> {
        let contract = IERC20::new(token, self.provider().clone());
        let balance = self.timed("balanceOf", contract.balanceOf(account).call()).await?;
        Ok(balance)
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        let contract = IERC20::new(token, self.provider().clone());
        let decimals = self.timed("decimals", contract.decimals().call()).await?;
        Ok(decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_is_lazy() {
        let client = EthereumClient::new("http://127.0.0.1:8545", Duration::from_secs(1));
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_rpc_url() {
        let result = EthereumClient::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(AppError::ProviderQueryFailed(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_query() {
        // Port 9 (discard) is not an RPC node.
        let client = EthereumClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let result = client.decimals(crate::ethereum::constants::USDT_ADDRESS).await;
        assert!(matches!(result, Err(AppError::ProviderQueryFailed(_))));
    }

    #[tokio::test]
    async fn test_silent_endpoint_times_out() {
        // Accepts connections and holds them open without ever replying.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client =
            EthereumClient::new(&format!("http://{addr}"), Duration::from_millis(300)).unwrap();
        let result = client.decimals(crate::ethereum::constants::USDT_ADDRESS).await;
        server.abort();

        match result {
            Err(AppError::ProviderQueryFailed(msg)) => {
                assert!(msg.contains("timed out"), "unexpected message: {msg}")
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
