//! Domain model types (pure).
//!
//! Events, their categories and the host message vocabulary.

pub mod category;
pub mod codes;
pub mod error;
pub mod event;

// Re-export for convenience
pub use category::{categorize, Category};
pub use error::{DrawError, HostError};
pub use event::{Event, LiveEntry, SignatureKey};
