//! # Storage Layer
//!
//! The gene table is read-only, so the only thing CiliaHub persists is the
//! usage counters behind the "popular genes" panel. The [`UsageStore`]
//! trait keeps the engine decoupled from where those counters live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, one JSON file in the session
//!   data directory
//! - [`memory::InMemoryStore`]: in-memory backend for testing, no
//!   persistence
//!
//! Single-threaded host, single writer: no locking is needed or provided.

use crate::error::Result;
use crate::usage::UsageCounters;

pub mod fs;
pub mod memory;

/// Abstract interface for usage-counter persistence.
pub trait UsageStore {
    /// Restore the counters saved by a previous `save`, or an empty set if
    /// nothing was saved yet.
    fn load(&self) -> Result<UsageCounters>;

    /// Persist the full counter map.
    fn save(&mut self, counters: &UsageCounters) -> Result<()>;

    /// Drop any persisted counters.
    fn clear(&mut self) -> Result<()>;
}
