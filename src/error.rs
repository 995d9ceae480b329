//! # SDK Errors
//!
//! This module defines the common error type used throughout the SDK.
//! By centralizing error definitions, we ensure consistent error handling across
//! all resource wrappers and the API client boundary.

/// Errors that can occur while talking to a GenoFlow server or while
/// validating arguments locally.
#[derive(Debug, thiserror::Error)]
pub enum SdkError {
    /// An argument had the wrong shape or type. The message is part of the
    /// public contract: callers match on it when surfacing CLI errors.
    #[error("Invalid argument value `{0}`.")]
    InvalidArgument(&'static str),

    /// The operation exists on the resource surface but has no concrete
    /// implementation in the current context (abstract guard).
    #[error("`{0}` is not implemented")]
    NotImplemented(&'static str),

    /// No resource matched the given identifier.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A value failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// The underlying client failed to reach the server.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A model payload returned by the server did not deserialize.
    #[error("Malformed model payload: {0}")]
    Model(#[from] serde_json::Error),
}
