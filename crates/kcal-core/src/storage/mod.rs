//! Persistence for the ledger and profile.
//!
//! The `Store` trait is the explicit load/save service injected into callers,
//! replacing ad-hoc access to a global key-value store. On every change the
//! full structure is serialized and written back; there are no incremental
//! writes and no cross-process coordination (single writer, last write wins).

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{ProfileLoad, Store};
