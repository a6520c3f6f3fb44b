//! In-memory host that records every request, for router tests.

use super::{DrawSurface, Host, TimerId};
use crate::model::{DrawError, HostError};
use std::time::Duration;

/// Host double that records outbound requests and drawn text.
#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub invalidations: usize,
    pub armed: Vec<(TimerId, Duration)>,
    pub disarmed: Vec<TimerId>,
    pub quit: Option<i32>,
    pub paints_begun: usize,
    pub paints_released: usize,
    /// Text drawn during the most recent paint, as `(x, y, text)`.
    pub lines: Vec<(i64, i64, String)>,
    /// Reject every draw call after this many successful ones.
    pub fail_draw_after: Option<usize>,
    /// Refuse to hand out a surface at all.
    pub refuse_paint: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts of the most recent paint, top to bottom.
    pub fn texts(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|(_, _, text)| text.as_str())
            .collect()
    }

    /// Whether the refresh timer is currently armed.
    pub fn timer_armed(&self) -> bool {
        let armed = self
            .armed
            .iter()
            .filter(|(id, _)| *id == TimerId::REFRESH)
            .count();
        let disarmed = self
            .disarmed
            .iter()
            .filter(|id| **id == TimerId::REFRESH)
            .count();
        armed > disarmed
    }
}

pub(crate) struct RecordingSurface<'a> {
    host: &'a mut RecordingHost,
    drawn: usize,
}

impl DrawSurface for RecordingSurface<'_> {
    fn text_out(&mut self, x: i64, y: i64, text: &str) -> Result<(), DrawError> {
        if self
            .host
            .fail_draw_after
            .is_some_and(|limit| self.drawn >= limit)
        {
            return Err(DrawError::Rejected {
                x,
                y,
                reason: "injected failure".to_string(),
            });
        }
        self.drawn += 1;
        self.host.lines.push((x, y, text.to_string()));
        Ok(())
    }
}

impl Drop for RecordingSurface<'_> {
    fn drop(&mut self) {
        self.host.paints_released += 1;
    }
}

impl Host for RecordingHost {
    type Surface<'a>
        = RecordingSurface<'a>
    where
        Self: 'a;

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn arm_timer(&mut self, timer: TimerId, period: Duration) {
        self.armed.push((timer, period));
    }

    fn disarm_timer(&mut self, timer: TimerId) {
        self.disarmed.push(timer);
    }

    fn post_quit(&mut self, exit_code: i32) {
        self.quit = Some(exit_code);
    }

    fn begin_paint(&mut self) -> Result<Self::Surface<'_>, HostError> {
        if self.refuse_paint {
            return Err(HostError::PaintUnavailable("refused by test".to_string()));
        }
        self.paints_begun += 1;
        self.lines.clear();
        Ok(RecordingSurface {
            host: self,
            drawn: 0,
        })
    }
}
