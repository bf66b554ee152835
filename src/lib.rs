//! Lista-Compras Core
//!
//! Headless shopping-list tracker: a fixed baseline of grocery items
//! plus user-added ones, local persistence of quantities, prices and
//! selection, running totals, and best-effort forwarding of selected
//! items to a spreadsheet endpoint.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Persistence abstractions and implementations
//! - remote: Spreadsheet endpoint clients (baseline fetch + submissions)
//! - table: Row view-model and calculation engine
//! - reconcile: Startup merge of baseline names with persisted records
//! - commands: User-facing actions (add, clear, submit)
//! - app: Façade wiring the layers together

pub mod app;
pub mod commands;
pub mod domain;
pub mod reconcile;
pub mod remote;
pub mod repository;
pub mod table;

pub use app::ShoppingList;
pub use commands::UserPrompt;
pub use domain::{DomainError, DomainResult, ItemRecord, ListConfig};
pub use remote::{BaselineSource, HttpSheetClient, JsonpBaselineLoader, SheetClient};
pub use repository::{FileStore, KeyValueStore, ListStore, MemoryStore};
pub use table::{Row, RowTemplate, TableView, TemplateRegistry};
