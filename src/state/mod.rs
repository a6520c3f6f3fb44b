//! Per-window state (pure).
//!
//! All state transitions are plain methods testable without a terminal.

pub mod message_store;
pub mod router;
pub mod scroll;

// Re-export for convenience
pub use message_store::{
    MessageStore, RecentLog, Snapshot, UniqueEntry, UniqueIndex, RECENT_CAPACITY,
};
pub use router::{EventRouter, Reply, RouterState, Signal, DEFAULT_TICK};
pub use scroll::{ScrollController, ScrollOffset, SCROLL_STEP};
