//! Error types for the boundary operations of jsonview-core.
//!
//! Navigation, coercion and structural writes never fail. Only parsing text
//! and binding documents to Rust types can produce an error.

use thiserror::Error;

/// Errors that can occur at the document boundary.
#[derive(Error, Debug)]
pub enum JsonError {
    /// The input text was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// A document could not be mapped to or from a Rust type.
    #[error("JSON binding error: {0}")]
    Binding(#[source] serde_json::Error),

    /// A [`Check`](crate::check::Check) failed and the caller asked for an error.
    #[error("check failed: {0}")]
    Check(String),
}

/// Convenience alias used throughout jsonview-core.
pub type Result<T> = std::result::Result<T, JsonError>;
