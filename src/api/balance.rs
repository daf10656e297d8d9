//! Token balance endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::{error::AppError, types::BalanceReport};

/// Query parameters for the balance request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BalanceQuery {
    /// Account address to report on (0x...).
    pub address: Option<String>,
}

/// `GET /api/balance?address=0x...`
///
/// Returns raw and formatted balances of every configured token. A query
/// string that cannot be decoded (e.g. a repeated `address`) is reported
/// as `InvalidAddress` in the usual JSON error shape.
pub async fn get_balance(
    State(state): State<AppState>,
    query: Result<Query<BalanceQuery>, QueryRejection>,
) -> Result<Json<BalanceReport>, AppError> {
    let Query(query) =
        query.map_err(|rejection| AppError::InvalidAddress(rejection.body_text()))?;

    tracing::info!(address = ?query.address, "get_balance called");

    let report = state
        .resolver
        .resolve(query.address.as_deref(), state.rpc_url.as_deref())
        .await
        .inspect_err(|e| {
            tracing::info!(status = %e.status_code(), error = %e, "get_balance failed")
        })?;

    Ok(Json(report))
}
