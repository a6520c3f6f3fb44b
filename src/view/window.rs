//! Terminal-backed window host.

use super::surface::{BufferSurface, CellSize};
use crate::host::{Host, TimerId};
use crate::model::HostError;
use ratatui::{buffer::Buffer, layout::Rect};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone, Copy)]
struct Timer {
    id: TimerId,
    period: Duration,
    next_due: Instant,
}

/// Window state the router talks to through [`Host`].
///
/// Paints go into an off-screen frame; the app presents it to the terminal
/// once the paint surface has been released.
#[derive(Debug)]
pub struct TerminalWindow {
    frame: Buffer,
    cell: CellSize,
    invalid: bool,
    painted: bool,
    timers: Vec<Timer>,
    quit: Option<i32>,
}

impl TerminalWindow {
    /// Window covering `area`.
    pub fn new(area: Rect) -> Self {
        Self {
            frame: Buffer::empty(area),
            cell: CellSize::default(),
            invalid: false,
            painted: false,
            timers: Vec::new(),
            quit: None,
        }
    }

    /// Client area.
    pub fn area(&self) -> Rect {
        self.frame.area
    }

    /// Change the client area. The next paint starts from a blank frame.
    pub fn resize(&mut self, area: Rect) {
        self.frame.resize(area);
        self.frame.reset();
    }

    /// Whether a repaint has been requested and not yet performed.
    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    /// Exit code posted by the router, if any.
    pub fn exit_code(&self) -> Option<i32> {
        self.quit
    }

    /// Whether a timer with this id is armed.
    pub fn has_timer(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    /// Time until the earliest timer is due, if any timer is armed.
    pub fn next_timeout(&self, now: Instant) -> Option<Duration> {
        self.timers
            .iter()
            .map(|t| t.next_due.saturating_duration_since(now))
            .min()
    }

    /// Ids of timers due at `now`, rescheduled for their next period.
    pub fn take_due_timers(&mut self, now: Instant) -> Vec<TimerId> {
        let mut due = Vec::new();
        for timer in &mut self.timers {
            if timer.next_due <= now {
                timer.next_due = now + timer.period;
                due.push(timer.id);
            }
        }
        due
    }

    /// The painted frame, if a paint finished since the last call.
    pub fn take_painted(&mut self) -> Option<&Buffer> {
        if std::mem::take(&mut self.painted) {
            Some(&self.frame)
        } else {
            None
        }
    }
}

impl Host for TerminalWindow {
    type Surface<'a>
        = BufferSurface<'a>
    where
        Self: 'a;

    fn invalidate(&mut self) {
        self.invalid = true;
    }

    fn arm_timer(&mut self, timer: TimerId, period: Duration) {
        let next_due = Instant::now() + period;
        match self.timers.iter_mut().find(|t| t.id == timer) {
            Some(existing) => {
                existing.period = period;
                existing.next_due = next_due;
            }
            None => self.timers.push(Timer {
                id: timer,
                period,
                next_due,
            }),
        }
        debug!(
            timer = timer.0,
            period_ms = period.as_millis() as u64,
            "Timer armed"
        );
    }

    fn disarm_timer(&mut self, timer: TimerId) {
        self.timers.retain(|t| t.id != timer);
        debug!(timer = timer.0, "Timer disarmed");
    }

    fn post_quit(&mut self, exit_code: i32) {
        self.quit = Some(exit_code);
    }

    fn begin_paint(&mut self) -> Result<Self::Surface<'_>, HostError> {
        // Beginning a paint validates the window, even one with nothing to show.
        self.invalid = false;
        let area = self.frame.area;
        if area.width == 0 || area.height == 0 {
            return Err(HostError::PaintUnavailable(format!(
                "client area is {}x{}",
                area.width, area.height
            )));
        }
        self.frame.reset();
        Ok(BufferSurface::new(
            &mut self.frame,
            self.cell,
            &mut self.painted,
        ))
    }
}
