//! Action Commands
//!
//! The three user-facing actions: add item, clear all, submit selected.
//! Thin handlers over the table, the store and the remote client, the
//! way the surface's buttons drive them.

mod actions;
mod prompt;

pub use actions::{add_item, clear_all, submit_selected};
pub use prompt::UserPrompt;
