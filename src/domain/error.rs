//! Domain Layer - Errors
//!
//! Common error type for every operation in the crate. Only
//! `MissingTemplate` is fatal to a running session; everything else is
//! recovered locally by the caller.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    /// The row template is not registered. Broken deployment, not a
    /// runtime condition: construction cannot proceed.
    MissingTemplate(String),
    /// User-correctable input problem (e.g. blank item name).
    InvalidInput(String),
    /// Row index out of range.
    NotFound(String),
    /// Remote endpoint misbehaved (transport or payload shape).
    Remote(String),
    /// Local key-value storage failed.
    Storage(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::MissingTemplate(id) => write!(f, "Row template '{}' not registered", id),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Remote(msg) => write!(f, "Remote error: {}", msg),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
