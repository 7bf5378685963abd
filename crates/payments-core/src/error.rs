//! Error Types
//!
//! Validation failures never reach the remote layer; remote failures carry an
//! optional human-readable message supplied by the server.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by panel operations
pub type PanelResult<T> = Result<T, PanelError>;

/// Input rejected before any remote call is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no selection")]
    NoSelection,
    #[error("missing fields")]
    MissingFields,
}

/// Failure reported by a remote collaborator
///
/// `message` is only populated when the server supplied one that is fit to
/// show to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{}", .message.as_deref().unwrap_or("remote call failed"))]
pub struct RemoteError {
    pub message: Option<String>,
}

impl RemoteError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// An error with no server-supplied message
    pub fn opaque() -> Self {
        Self { message: None }
    }

    /// The server message, or `fallback` when there is none (or it is blank)
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

/// Failures of `submit`. Fetch failures stay in the list's `QueryResult::Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to create payment: {0}")]
    RemoteMutation(#[source] RemoteError),
}

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid panel config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid panel config: {0}")]
    Invalid(String),
}
