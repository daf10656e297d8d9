//! Account address validation.
//!
//! Accepts `0x` + 40 hex characters. All-lowercase or all-uppercase input is
//! taken as unchecksummed; mixed case must be a valid EIP-55 checksum.
//! The canonical rendering is the EIP-55 checksummed form.

use std::str::FromStr;

use alloy::primitives::Address;

use crate::error::{AppError, Result};

/// Length of an address without its `0x` prefix.
const ADDRESS_HEX_LEN: usize = 40;

/// Parse and validate an account address supplied by a caller.
///
/// Returns `MissingAddress` for absent or blank input and `InvalidAddress`
/// for anything that fails the shape or checksum rules.
pub fn parse_account_address(input: Option<&str>) -> Result<Address> {
    let trimmed = input.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(AppError::MissingAddress);
    }

    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or_else(|| AppError::InvalidAddress(format!("must start with '0x': {}", trimmed)))?;

    if body.len() != ADDRESS_HEX_LEN {
        return Err(AppError::InvalidAddress(format!(
            "expected {} hex characters after '0x', got {}: {}",
            ADDRESS_HEX_LEN,
            body.len(),
            trimmed
        )));
    }

    if !body.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidAddress(format!("non-hex character in {}", trimmed)));
    }

    let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
    let prefixed = format!("0x{}", body);

    if has_lower && has_upper {
        Address::parse_checksummed(&prefixed, None)
            .map_err(|e| AppError::InvalidAddress(format!("bad checksum for {}: {}", trimmed, e)))
    } else {
        Address::from_str(&prefixed)
            .map_err(|e| AppError::InvalidAddress(format!("{}: {}", trimmed, e)))
    }
}

/// Canonical string form of an address (EIP-55 checksum casing).
pub fn canonical_address(address: &Address) -> String {
    address.to_checksum(None)
}

/// Validate `input` and return its canonical rendering.
pub fn canonicalize(input: &str) -> Result<String> {
    parse_account_address(Some(input)).map(|address| canonical_address(&address))
}
