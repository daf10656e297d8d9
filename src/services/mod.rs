//! Business logic services module.

pub mod balance;

pub use balance::BalanceResolver;
