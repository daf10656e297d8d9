//! Token Balance API Library
//!
//! A read-only HTTP service reporting an account's ERC20 token balances,
//! normalized to human-readable decimal strings.
//!
//! # Features
//!
//! - **Address Validation**: EIP-55 checksum verification and canonicalization
//! - **Concurrent Queries**: `balanceOf` and `decimals` for every token in one round-trip
//! - **Exact Formatting**: base-10 shifting of arbitrary-precision balances
//!
//! # Example
//!
//! ```rust,ignore
//! use token_balance_api::{api, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let app = api::router(api::AppState::from_config(&config));
//!     let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod ethereum;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use services::BalanceResolver;
