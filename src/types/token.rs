//! Token-related types.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{
    error::{AppError, Result},
    ethereum::constants::{EZUSD_ADDRESS, EZUSD_LABEL, USDT_ADDRESS, USDT_LABEL},
};

/// A token contract reported on, with the key it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    /// Key used in the balance report (e.g., "usdt").
    pub label: String,
    /// Token contract address.
    pub address: Address,
}

impl TokenDescriptor {
    pub fn new(label: impl Into<String>, address: Address) -> Self {
        Self { label: label.into(), address }
    }
}

/// Immutable, ordered list of tokens the resolver queries.
#[derive(Debug, Clone)]
pub struct TokenSet {
    tokens: Arc<[TokenDescriptor]>,
}

impl TokenSet {
    /// Create a token set. Rejects an empty list and duplicate labels.
    pub fn new(tokens: Vec<TokenDescriptor>) -> Result<Self> {
        if tokens.is_empty() {
            return Err(AppError::Config("token set cannot be empty".into()));
        }

        for (i, token) in tokens.iter().enumerate() {
            if tokens[..i].iter().any(|t| t.label == token.label) {
                return Err(AppError::Config(format!("duplicate token label '{}'", token.label)));
            }
        }

        Ok(Self { tokens: tokens.into() })
    }

    /// USDT and ezUSD on Ethereum mainnet.
    pub fn mainnet() -> Self {
        Self {
            tokens: Arc::from(vec![
                TokenDescriptor::new(USDT_LABEL, USDT_ADDRESS),
                TokenDescriptor::new(EZUSD_LABEL, EZUSD_ADDRESS),
            ]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenDescriptor> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Balance of one token for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Raw balance in smallest unit, as a decimal string.
    pub balance: String,
    /// Human-readable balance with proper decimals.
    pub formatted: String,
    /// Number of decimals reported by the contract.
    pub decimals: u8,
}

impl TokenBalance {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { balance: raw.to_string(), formatted: format_units(raw, decimals), decimals }
    }
}

/// Per-token balances for one account, keyed by token label.
///
/// Serializes as a JSON object whose keys keep the token set's order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceReport {
    entries: Vec<(String, TokenBalance)>,
}

impl BalanceReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, balance: TokenBalance) {
        self.entries.push((label.into(), balance));
    }

    /// Look up the balance reported under `label`.
    pub fn get(&self, label: &str) -> Option<&TokenBalance> {
        self.entries.iter().find(|(l, _)| l == label).map(|(_, b)| b)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BalanceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, balance) in &self.entries {
            map.serialize_entry(label, balance)?;
        }
        map.end()
    }
}

/// Format a U256 value with decimals to an exact decimal string.
///
/// With `decimals == 0` the raw integer is returned unchanged. Otherwise
/// trailing fractional zeros are trimmed but one fractional digit is always
/// kept, so whole amounts render as `"5.0"` and zero as `"0.0"`.
pub fn format_units(value: U256, decimals: u8) -> String {
    let value_str = value.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return value_str;
    }

    // Left-pad so there is at least one integer digit
    let padded = if value_str.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - value_str.len()), value_str)
    } else {
        value_str
    };

    let (integer, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };

    format!("{}.{}", integer, fraction)
}
