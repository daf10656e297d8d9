//! Smart contract bindings.

pub mod erc20;
