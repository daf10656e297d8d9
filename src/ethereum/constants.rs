//! Ethereum network constants.
//!
//! Contains the mainnet token contracts reported by default.

use alloy::primitives::{address, Address};

// ============================================================================
// Reported Token Addresses (Ethereum Mainnet)
// ============================================================================

/// Tether USD (USDT) address on Ethereum Mainnet.
pub const USDT_ADDRESS: Address = address!("dAC17F958D2ee523a2206206994597C13D831ec7");

/// Renzo Restaked USD (ezUSD) address on Ethereum Mainnet.
pub const EZUSD_ADDRESS: Address = address!("77b80f4ac4c6cbb4982689749177349cf1635115");

/// Response label for USDT.
pub const USDT_LABEL: &str = "usdt";

/// Response label for ezUSD.
pub const EZUSD_LABEL: &str = "ezusd";
