//! Error types for Discord entity construction and API access.
//!
//! This module provides the library's error hierarchy. The `Error` enum serves as the
//! top-level error type that wraps domain-specific errors via `#[from]` conversions.
//! Transport-level errors from reqwest are surfaced unmodified; nothing is retried or
//! recovered at this layer, all errors bubble to the caller.

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level error type for all library operations.
///
/// Aggregates all possible error types that can occur when constructing entities from
/// Discord payloads or issuing authenticated API calls. Most variants use `#[from]`
/// for automatic error conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error during environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Internal issue indicating unexpected behavior, such as a malformed
    /// snowflake ID or a payload of the wrong shape.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Session store operation error.
    ///
    /// Raised when the OAuth2 token payload cannot be read from or written to
    /// the underlying tower-sessions store.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    ///
    /// Surfaced unmodified when a Discord API call fails at the transport level
    /// or the API answers with a non-success status other than 401.
    #[error(transparent)]
    RequestErr(#[from] reqwest::Error),

    /// Failure to decode a JSON response body.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Required field absent from a Discord payload at entity construction.
    ///
    /// The Discord user object schema requires `id` to always be present;
    /// construction fails deterministically when it is missing.
    #[error("Missing required field '{field}' in Discord payload")]
    MissingField {
        /// Name of the absent payload key.
        field: &'static str,
    },

    /// No valid OAuth2 credential is available for the attempted operation.
    ///
    /// Returned when the session holds no token payload, or when the Discord
    /// API rejects the presented credential with 401.
    #[error("Not authorized to access Discord API with the current credentials")]
    Unauthorized,
}
