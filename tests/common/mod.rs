//! Common utilities for integration tests.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;
use token_balance_api::{
    ethereum::{ProviderConnector, TokenReader},
    types::{TokenDescriptor, TokenSet},
    AppError, BalanceResolver, Result,
};

/// A valid EIP-55 checksummed account address.
pub const ACCOUNT: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

pub const TOKEN_A: Address = address!("00000000000000000000000000000000000000aa");
pub const TOKEN_B: Address = address!("00000000000000000000000000000000000000bb");

/// Token set labelled `usdt` / `token2` over the mock contracts.
pub fn test_tokens() -> TokenSet {
    TokenSet::new(vec![
        TokenDescriptor::new("usdt", TOKEN_A),
        TokenDescriptor::new("token2", TOKEN_B),
    ])
    .expect("valid token set")
}

/// Which mocked call should revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingCall {
    BalanceOf(Address),
    Decimals(Address),
}

/// In-memory `TokenReader` with optional latency and failure injection.
#[derive(Default)]
pub struct MockReader {
    balances: HashMap<Address, U256>,
    decimals: HashMap<Address, u8>,
    delay: Duration,
    failing: Option<FailingCall>,
    started: AtomicUsize,
    completed: AtomicUsize,
    accounts: Mutex<Vec<Address>>,
}

impl MockReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: Address, balance: U256, decimals: u8) -> Self {
        self.balances.insert(token, balance);
        self.decimals.insert(token, decimals);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn failing(mut self, call: FailingCall) -> Self {
        self.failing = Some(call);
        self
    }

    /// Number of calls that reached the reader.
    pub fn calls_started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    /// Number of calls that ran to completion.
    pub fn calls_completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Accounts passed to `balance_of`, in call order.
    pub fn accounts_seen(&self) -> Vec<Address> {
        self.accounts.lock().unwrap().clone()
    }

    async fn enter(&self, call: FailingCall) -> Result<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        if self.failing == Some(call) {
            return Err(AppError::ProviderQueryFailed("execution reverted".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenReader for MockReader {
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256> {
        self.accounts.lock().unwrap().push(account);
        self.enter(FailingCall::BalanceOf(token)).await?;
        self.balances
            .get(&token)
            .copied()
            .ok_or_else(|| AppError::ProviderQueryFailed(format!("no contract at {token}")))
    }

    async fn decimals(&self, token: Address) -> Result<u8> {
        self.enter(FailingCall::Decimals(token)).await?;
        self.decimals
            .get(&token)
            .copied()
            .ok_or_else(|| AppError::ProviderQueryFailed(format!("no contract at {token}")))
    }
}

/// Connector handing out a shared `MockReader` and counting connections.
pub struct MockConnector {
    pub reader: Arc<MockReader>,
    connects: AtomicUsize,
}

impl MockConnector {
    pub fn new(reader: MockReader) -> Arc<Self> {
        Arc::new(Self { reader: Arc::new(reader), connects: AtomicUsize::new(0) })
    }

    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }
}

impl ProviderConnector for MockConnector {
    fn connect(&self, _endpoint: &str) -> Result<Arc<dyn TokenReader>> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        Ok(self.reader.clone())
    }
}

/// Reader with the balances from the reference scenario.
pub fn scenario_reader() -> MockReader {
    MockReader::new()
        .with_token(TOKEN_A, U256::from(5_000_000u64), 6)
        .with_token(TOKEN_B, U256::from(2_500_000_000_000_000_000u64), 18)
}

/// Resolver over `test_tokens()` backed by `connector`.
pub fn resolver_with(connector: Arc<MockConnector>) -> BalanceResolver {
    BalanceResolver::new(test_tokens(), connector)
}

/// Skip test if no live RPC endpoint is configured.
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {{
        let _ = dotenvy::dotenv();
        match std::env::var("RPC_URL").ok().filter(|s| !s.is_empty()) {
            Some(url) => url,
            None => {
                eprintln!("Skipping test: RPC_URL not set");
                return;
            }
        }
    }};
}
