//! Wheel-driven vertical scroll offset.

use crate::model::codes::WHEEL_DELTA;

/// Surface units scrolled per wheel notch.
pub const SCROLL_STEP: i64 = 20;

/// Non-negative vertical offset, in surface units.
///
/// Floor of 0; there is no ceiling beyond integer saturation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScrollOffset(u32);

impl ScrollOffset {
    /// Offset at the very top.
    pub const TOP: Self = Self(0);

    /// Wrap a raw offset.
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    /// Raw offset.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Owner of the scroll offset.
#[derive(Debug, Clone, Default)]
pub struct ScrollController {
    offset: ScrollOffset,
}

impl ScrollController {
    /// Controller scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset.
    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Apply a raw signed wheel delta.
    ///
    /// Positive deltas (wheel rotated away from the user) scroll up and
    /// decrease the offset. Notches use floor division, so a partial "down"
    /// rotation still counts as one notch.
    pub fn on_wheel(&mut self, delta: i16) -> ScrollOffset {
        let notches = i64::from(delta).div_euclid(i64::from(WHEEL_DELTA));
        let next = i64::from(self.offset.0) - notches * SCROLL_STEP;
        let clamped = next.clamp(0, i64::from(u32::MAX));
        self.offset = ScrollOffset(clamped as u32);
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: i16 = 120;
    const DOWN: i16 = -120;

    #[test]
    fn starts_at_top() {
        assert_eq!(ScrollController::new().offset(), ScrollOffset::TOP);
    }

    #[test]
    fn up_notch_at_top_stays_at_zero() {
        let mut scroll = ScrollController::new();
        assert_eq!(scroll.on_wheel(UP).get(), 0);
    }

    #[test]
    fn down_notch_from_top_advances_one_step() {
        let mut scroll = ScrollController::new();
        assert_eq!(scroll.on_wheel(DOWN).get(), 20);
    }

    #[test]
    fn up_after_down_returns_to_top() {
        let mut scroll = ScrollController::new();
        scroll.on_wheel(DOWN);
        scroll.on_wheel(DOWN);
        scroll.on_wheel(UP);
        assert_eq!(scroll.offset().get(), 20);
        scroll.on_wheel(UP);
        assert_eq!(scroll.offset().get(), 0);
    }

    #[test]
    fn multi_notch_delta_scales_step() {
        let mut scroll = ScrollController::new();
        scroll.on_wheel(3 * DOWN);
        assert_eq!(scroll.offset().get(), 60);
    }

    #[test]
    fn partial_rotation_uses_floor_division() {
        let mut scroll = ScrollController::new();
        // -60 / 120 floors to -1: one notch down.
        scroll.on_wheel(-60);
        assert_eq!(scroll.offset().get(), 20);
        // 60 / 120 floors to 0: no movement up.
        scroll.on_wheel(60);
        assert_eq!(scroll.offset().get(), 20);
    }

    #[test]
    fn large_up_delta_clamps_at_zero() {
        let mut scroll = ScrollController::new();
        scroll.on_wheel(DOWN);
        scroll.on_wheel(i16::MAX);
        assert_eq!(scroll.offset(), ScrollOffset::TOP);
    }

    #[test]
    fn no_ceiling_on_downward_scroll() {
        let mut scroll = ScrollController::new();
        for _ in 0..1000 {
            scroll.on_wheel(i16::MIN);
        }
        // i16::MIN / 120 floors to -274 notches per event.
        assert_eq!(scroll.offset().get(), 1000 * 274 * 20);
    }
}
