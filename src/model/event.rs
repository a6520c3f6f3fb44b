//! Events delivered by the host and the entries derived from them.

use super::category::{categorize, Category};
use std::fmt;

/// A single notification delivered by the host to the observed window.
///
/// `param_a` and `param_b` are opaque to the store; only the router and the
/// host translator interpret them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// Message code.
    pub code: u32,
    /// First parameter (`wParam`).
    pub param_a: usize,
    /// Second parameter (`lParam`).
    pub param_b: isize,
}

impl Event {
    /// Create an event from its raw parts.
    pub const fn new(code: u32, param_a: usize, param_b: isize) -> Self {
        Self {
            code,
            param_a,
            param_b,
        }
    }

    /// Identity used to deduplicate events. `param_b` is deliberately excluded.
    pub fn signature(&self) -> SignatureKey {
        SignatureKey {
            code: self.code,
            param_a: self.param_a,
        }
    }

    /// Semantic bucket for this event's code.
    pub fn category(&self) -> Category {
        categorize(self.code)
    }
}

/// Deduplication key: `(code, param_a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignatureKey {
    /// Message code.
    pub code: u32,
    /// First parameter.
    pub param_a: usize,
}

/// A recorded event together with its display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveEntry {
    event: Event,
    description: String,
}

impl LiveEntry {
    /// Format an event into an entry.
    pub fn from_event(event: Event) -> Self {
        let description = format!(
            "Msg: {} | wParam: {} | lParam: {}",
            event.code, event.param_a, event.param_b
        );
        Self { event, description }
    }

    /// The event this entry was formatted from.
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Display line, fixed at formatting time.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for LiveEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}
