//! Capabilities the router needs from its host.
//!
//! The router never talks to a terminal or a windowing system directly. It
//! receives a `&mut impl Host` on every dispatch and asks it to redraw, manage
//! the refresh timer, end the event loop, or hand out a paint surface.

use crate::model::{DrawError, HostError};
use std::time::Duration;

/// Identifier of a host timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub usize);

impl TimerId {
    /// The router's redraw timer.
    pub const REFRESH: Self = Self(1);
}

/// "Draw text at position" capability of a paint surface.
///
/// Coordinates are in surface units with the origin at the top-left corner.
/// Positions outside the visible area are legal; the surface clips.
pub trait DrawSurface {
    /// Draw a single line of text with its top-left corner at `(x, y)`.
    fn text_out(&mut self, x: i64, y: i64, text: &str) -> Result<(), DrawError>;
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn text_out(&mut self, x: i64, y: i64, text: &str) -> Result<(), DrawError> {
        (**self).text_out(x, y, text)
    }
}

/// Outbound requests from the router to the window host.
pub trait Host {
    /// Surface handed out for one paint request.
    ///
    /// Dropping the surface ends the paint session. Implementations release
    /// whatever they acquired in [`Host::begin_paint`] in `Drop`, so the
    /// release happens exactly once on every exit path.
    type Surface<'a>: DrawSurface
    where
        Self: 'a;

    /// Mark the whole window as needing a repaint.
    fn invalidate(&mut self);

    /// Start a periodic timer.
    fn arm_timer(&mut self, timer: TimerId, period: Duration);

    /// Stop a periodic timer. Unknown timers are ignored.
    fn disarm_timer(&mut self, timer: TimerId);

    /// Ask the host to leave its event loop with `exit_code`.
    fn post_quit(&mut self, exit_code: i32);

    /// Acquire the paint surface for the current paint request.
    fn begin_paint(&mut self) -> Result<Self::Surface<'_>, HostError>;
}

#[cfg(test)]
pub(crate) mod recording;
