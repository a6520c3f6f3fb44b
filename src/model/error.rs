//! Error types for the host capabilities.
//!
//! The core itself accepts every event; these errors only describe the two
//! places where a host capability can refuse work:
//!
//! - [`HostError`] - the host could not hand out a paint surface
//! - [`DrawError`] - the surface rejected a draw call partway through a render
//!
//! Both are absorbed by the router (logged, never surfaced to the user).

use thiserror::Error;

/// Failure of a host capability requested by the router.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No paint surface could be acquired for this request.
    #[error("Paint surface unavailable: {0}")]
    PaintUnavailable(String),
}

/// Failure to draw text on a paint surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    /// The surface refused the text at the given position.
    #[error("Surface rejected text at ({x}, {y}): {reason}")]
    Rejected {
        /// Horizontal position in surface units.
        x: i64,
        /// Vertical position in surface units.
        y: i64,
        /// Why the surface refused.
        reason: String,
    },
}
