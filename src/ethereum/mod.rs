//! Ethereum interaction module.
//!
//! Contains the Ethereum client, the provider seams used by the balance
//! resolver, and contract bindings.

pub mod client;
pub mod constants;
pub mod contracts;
pub mod reader;

pub use client::{EthereumClient, HttpProvider};
pub use reader::{HttpConnector, ProviderConnector, TokenReader};
