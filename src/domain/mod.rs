//! Domain Layer
//!
//! Contains the core entities and domain abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod config;
mod error;
mod record;

pub use config::ListConfig;
pub use error::{DomainError, DomainResult};
pub use record::{parse_entry, ItemRecord};
