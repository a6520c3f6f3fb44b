//! Paint surface backed by a ratatui [`Buffer`].

use crate::host::DrawSurface;
use crate::model::DrawError;
use ratatui::{buffer::Buffer, style::Style};

/// Size of one terminal cell in surface units.
///
/// The renderer lays out in surface units; the terminal surface maps them onto
/// cells. With the default layout metrics one rendered line is one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSize {
    /// Surface units per column.
    pub width: i64,
    /// Surface units per row.
    pub height: i64,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: 10,
            height: 20,
        }
    }
}

/// Draws text into a buffer for the duration of one paint session.
///
/// Text outside the buffer area is clipped. Dropping the surface flags the
/// buffer as ready to be presented.
pub struct BufferSurface<'a> {
    buffer: &'a mut Buffer,
    cell: CellSize,
    ready: &'a mut bool,
}

impl<'a> BufferSurface<'a> {
    /// Start drawing into `buffer`; `ready` is set once the surface is released.
    pub fn new(buffer: &'a mut Buffer, cell: CellSize, ready: &'a mut bool) -> Self {
        Self {
            buffer,
            cell,
            ready,
        }
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn text_out(&mut self, x: i64, y: i64, text: &str) -> Result<(), DrawError> {
        let area = self.buffer.area;
        let column = x.div_euclid(self.cell.width.max(1));
        let row = y.div_euclid(self.cell.height.max(1));
        if column < 0 || row < 0 || column >= i64::from(area.width) || row >= i64::from(area.height)
        {
            return Ok(());
        }

        // Bounds checked above, both fit in u16.
        let column = column as u16;
        let row = row as u16;
        self.buffer.set_stringn(
            area.x + column,
            area.y + row,
            text,
            usize::from(area.width - column),
            Style::default(),
        );
        Ok(())
    }
}

impl Drop for BufferSurface<'_> {
    fn drop(&mut self) {
        *self.ready = true;
    }
}
