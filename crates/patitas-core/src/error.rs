//! # Store Error Types
//!
//! Typed error handling for the patitas storefront client.
//! All fallible operations return `Result<T, StoreError>`.

use thiserror::Error;

/// Core error type for all storefront operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration errors (bad endpoint URLs, invalid config file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/IO error before an HTTP response was obtained
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from a microservice. `message` carries the
    /// server-provided text when the body had one, else the generic
    /// `HTTP error, status=<code>` form.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body could not be parsed into the expected shape
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Persisted client state could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Checkout attempted with no signed-in user or no items
    #[error("cart is empty")]
    EmptyCart,
}

impl StoreError {
    /// Returns the HTTP status code when this error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for a 401 response (rejected credentials/token)
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, StoreError::Http { status: 401, .. })
    }

    /// Returns true if this error came from the wire rather than from a
    /// local precondition or persistence failure
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            StoreError::Network(_) | StoreError::Http { .. } | StoreError::Serialization(_)
        )
    }
}

/// Result type alias for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
