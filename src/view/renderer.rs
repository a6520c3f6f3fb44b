//! Text layout of the store snapshot onto a paint surface.

use crate::host::DrawSurface;
use crate::model::DrawError;
use crate::state::{ScrollOffset, Snapshot};

/// Header above the recent-activity section.
pub const LIVE_HEADER: &str = "[Live Events]";
/// Header above the unique-signature section.
pub const UNIQUE_HEADER: &str = "[Unique Events]";

/// Layout metrics in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Horizontal position of every line.
    pub left: i64,
    /// Vertical position of the first header when not scrolled.
    pub top_margin: i64,
    /// Vertical advance per line.
    pub line_height: i64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            left: 10,
            top_margin: 20,
            line_height: 20,
        }
    }
}

/// Lays out the recent log and the unique index, one line per entry.
///
/// No wrapping or clipping: lines scrolled above the surface are still drawn
/// and the surface discards them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    metrics: LayoutMetrics,
}

impl Renderer {
    /// Renderer with custom metrics.
    pub fn new(metrics: LayoutMetrics) -> Self {
        Self { metrics }
    }

    /// Metrics this renderer lays out with.
    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    /// Draw both sections, top to bottom.
    ///
    /// Stops at the first draw failure and returns it.
    pub fn render<S>(
        &self,
        snapshot: Snapshot<'_>,
        offset: ScrollOffset,
        surface: &mut S,
    ) -> Result<(), DrawError>
    where
        S: DrawSurface + ?Sized,
    {
        let LayoutMetrics {
            left,
            top_margin,
            line_height,
        } = self.metrics;
        let mut y = top_margin - i64::from(offset.get());

        surface.text_out(left, y, LIVE_HEADER)?;
        y += line_height;
        for entry in snapshot.recent.iter() {
            surface.text_out(left, y, entry.description())?;
            y += line_height;
        }

        y += line_height;
        surface.text_out(left, y, UNIQUE_HEADER)?;
        y += line_height;
        for unique in snapshot.unique.iter() {
            let line = format!("{}: {}", unique.category, unique.entry.description());
            surface.text_out(left, y, &line)?;
            y += line_height;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Event;
    use crate::state::MessageStore;

    #[derive(Default)]
    struct Lines {
        drawn: Vec<(i64, i64, String)>,
        fail_at: Option<usize>,
    }

    impl DrawSurface for Lines {
        fn text_out(&mut self, x: i64, y: i64, text: &str) -> Result<(), DrawError> {
            if self.fail_at == Some(self.drawn.len()) {
                return Err(DrawError::Rejected {
                    x,
                    y,
                    reason: "full".to_string(),
                });
            }
            self.drawn.push((x, y, text.to_string()));
            Ok(())
        }
    }

    #[test]
    fn empty_store_draws_both_headers_separated_by_blank_line() {
        let store = MessageStore::new();
        let mut lines = Lines::default();

        Renderer::default()
            .render(store.snapshot(), ScrollOffset::TOP, &mut lines)
            .unwrap();

        assert_eq!(
            lines.drawn,
            vec![
                (10, 20, LIVE_HEADER.to_string()),
                (10, 60, UNIQUE_HEADER.to_string()),
            ]
        );
    }

    #[test]
    fn entries_follow_their_headers_one_line_apart() {
        let mut store = MessageStore::new();
        store.record(Event::new(0x0100, 65, 0));
        store.record(Event::new(0x0100, 65, 7));
        let mut lines = Lines::default();

        Renderer::default()
            .render(store.snapshot(), ScrollOffset::TOP, &mut lines)
            .unwrap();

        let ys: Vec<i64> = lines.drawn.iter().map(|(_, y, _)| *y).collect();
        assert_eq!(ys, vec![20, 40, 60, 100, 120]);
        assert_eq!(
            lines.drawn[4].2,
            "Keyboard Input: Msg: 256 | wParam: 65 | lParam: 0"
        );
    }

    #[test]
    fn offset_shifts_everything_up_including_off_surface_lines() {
        let mut store = MessageStore::new();
        store.record(Event::new(0x0005, 0, 0));
        let mut lines = Lines::default();

        Renderer::default()
            .render(store.snapshot(), ScrollOffset::new(40), &mut lines)
            .unwrap();

        assert_eq!(lines.drawn[0], (10, -20, LIVE_HEADER.to_string()));
        assert_eq!(lines.drawn.len(), 4);
    }

    #[test]
    fn custom_metrics_are_respected() {
        let store = MessageStore::new();
        let mut lines = Lines::default();
        let renderer = Renderer::new(LayoutMetrics {
            left: 0,
            top_margin: 0,
            line_height: 1,
        });

        renderer
            .render(store.snapshot(), ScrollOffset::TOP, &mut lines)
            .unwrap();

        assert_eq!(renderer.metrics().line_height, 1);
        assert_eq!(lines.drawn[1], (0, 2, UNIQUE_HEADER.to_string()));
    }

    #[test]
    fn draw_failure_stops_rendering() {
        let mut store = MessageStore::new();
        for i in 0..5 {
            store.record(Event::new(0x0200, i, 0));
        }
        let mut lines = Lines {
            fail_at: Some(3),
            ..Lines::default()
        };

        let result = Renderer::default().render(store.snapshot(), ScrollOffset::TOP, &mut lines);

        assert!(matches!(result, Err(DrawError::Rejected { y: 80, .. })));
        assert_eq!(lines.drawn.len(), 3);
    }
}
