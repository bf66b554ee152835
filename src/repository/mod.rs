//! Repository Layer
//!
//! Persistence abstractions and implementations.

mod file;
mod list_store;
mod memory;
mod traits;


pub use file::FileStore;
pub use list_store::ListStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
