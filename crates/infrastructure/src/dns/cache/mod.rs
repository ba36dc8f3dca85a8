//! Persistent record cache.
//!
//! The in-memory collection is the source of truth. Every mutation rewrites
//! the whole JSON snapshot before returning.

pub mod snapshot;
pub mod store;

pub use store::JsonCacheStore;
