//! In-memory document store for Atrium.
//!
//! [`MemoryStore`] implements every repository contract from
//! `atrium-domain` over per-collection hash maps behind async
//! read-write locks. It is the whole persistence layer of the backend:
//! the repository traits are the document-store boundary, and nothing
//! above this crate knows or cares what sits behind them.

mod memory;

pub use memory::MemoryStore;
