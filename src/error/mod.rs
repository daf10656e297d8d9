//! Error types and handling module.
//!
//! Defines all application-specific error types and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// No address was supplied.
    #[error("Address parameter is required")]
    MissingAddress,

    /// Address failed shape or checksum validation.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// No provider endpoint is configured.
    #[error("RPC_URL not configured")]
    ProviderUnconfigured,

    /// A remote provider query failed.
    #[error("Provider query failed: {0}")]
    ProviderQueryFailed(String),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingAddress | AppError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderUnconfigured
            | AppError::ProviderQueryFailed(_)
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message shown to API callers.
    pub fn message(&self) -> &'static str {
        match self {
            AppError::MissingAddress => "Address parameter is required",
            AppError::InvalidAddress(_) => "Invalid address",
            AppError::ProviderUnconfigured => "RPC_URL not configured",
            AppError::ProviderQueryFailed(_) => "Failed to fetch balances",
            AppError::Config(_) => "Server misconfigured",
        }
    }

    /// Underlying cause, if any.
    pub fn details(&self) -> Option<&str> {
        match self {
            AppError::InvalidAddress(cause)
            | AppError::ProviderQueryFailed(cause)
            | AppError::Config(cause) => Some(cause.as_str()),
            AppError::MissingAddress | AppError::ProviderUnconfigured => None,
        }
    }
}

impl From<alloy::contract::Error> for AppError {
    fn from(err: alloy::contract::Error) -> Self {
        AppError::ProviderQueryFailed(err.to_string())
    }
}

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self { error: err.message().to_string(), details: err.details().map(str::to_string) }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::from(&self))).into_response()
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
