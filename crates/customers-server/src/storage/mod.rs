//! Storage layer
//!
//! Collections live in memory for the process lifetime; they are seeded once
//! from JSON documents at startup.

pub mod loader;
pub mod memory;

pub use loader::load_store;
pub use memory::RecordStore;
