//! Balance resolution service.
//!
//! Validates the account, then reads `balanceOf` and `decimals` for every
//! configured token concurrently. Any failed query fails the whole report.

use std::sync::Arc;

use alloy::primitives::Address;
use futures::future::try_join_all;

use crate::{
    error::{AppError, Result},
    ethereum::{ProviderConnector, TokenReader},
    types::{
        canonical_address, parse_account_address, BalanceReport, TokenBalance, TokenDescriptor,
        TokenSet,
    },
};

/// Resolves token balances for an account.
#[derive(Clone)]
pub struct BalanceResolver {
    tokens: TokenSet,
    connector: Arc<dyn ProviderConnector>,
}

impl BalanceResolver {
    /// Create a new resolver over a fixed token set.
    pub fn new(tokens: TokenSet, connector: Arc<dyn ProviderConnector>) -> Self {
        Self { tokens, connector }
    }

    /// Resolve balances of every configured token for `address`.
    ///
    /// Validation happens before any provider is contacted:
    /// - `MissingAddress` when `address` is absent or blank
    /// - `InvalidAddress` when it fails shape or checksum rules
    /// - `ProviderUnconfigured` when `endpoint` is absent or blank
    ///
    /// Afterwards all queries run concurrently; the first failure is
    /// returned as `ProviderQueryFailed` and the remaining queries are dropped.
    pub async fn resolve(
        &self,
        address: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<BalanceReport> {
        let account = parse_account_address(address)?;

        let endpoint = match endpoint.map(str::trim).filter(|e| !e.is_empty()) {
            Some(endpoint) => endpoint,
            None => {
                tracing::error!(
                    defect = "configuration",
                    "Provider endpoint not configured; set RPC_URL"
                );
                return Err(AppError::ProviderUnconfigured);
            }
        };

        tracing::debug!(
            account = %canonical_address(&account),
            tokens = self.tokens.len(),
            "Resolving token balances"
        );

        let balances = self.query_all(endpoint, account).await.map_err(|e| {
            tracing::warn!(
                account = %canonical_address(&account),
                error = %e,
                "Balance query failed"
            );
            match e {
                AppError::ProviderQueryFailed(_) => e,
                other => AppError::ProviderQueryFailed(other.to_string()),
            }
        })?;

        let mut report = BalanceReport::new();
        for (token, balance) in self.tokens.iter().zip(balances) {
            report.insert(token.label.clone(), balance);
        }

        tracing::debug!(account = %canonical_address(&account), "Token balances resolved");

        Ok(report)
    }

    /// Connect to `endpoint` and query every token, in token set order.
    async fn query_all(&self, endpoint: &str, account: Address) -> Result<Vec<TokenBalance>> {
        let reader = self.connector.connect(endpoint)?;
        let queries = self.tokens.iter().map(|token| query_token(reader.as_ref(), token, account));
        let balances = try_join_all(queries).await?;
        Ok(balances)
    }
}

/// Read balance and decimals of one token concurrently.
async fn query_token(
    reader: &dyn TokenReader,
    token: &TokenDescriptor,
    account: Address,
) -> Result<TokenBalance> {
    let (balance, decimals) = futures::try_join!(
        reader.balance_of(token.address, account),
        reader.decimals(token.address)
    )?;

    tracing::trace!(
        token = %token.label,
        balance = %balance,
        decimals = decimals,
        "Token queried"
    );

    Ok(TokenBalance::new(balance, decimals))
}
