//! Fixed-size outer frame every screen is drawn inside.
//!
//! The frame is always 80x45 cells with a double-line border, anchored at the
//! top-left of whatever area it is given. Smaller terminals clip it.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, BorderType, Borders, Widget},
};

pub const FRAME_WIDTH: u16 = 80;
pub const FRAME_HEIGHT: u16 = 45;

/// Double-bordered 80x45 container
#[derive(Debug, Default, Clone, Copy)]
pub struct OuterFrame;

impl OuterFrame {
    pub fn new() -> Self {
        Self
    }

    /// Area the frame occupies inside `area`
    pub fn bounds(area: Rect) -> Rect {
        Rect::new(
            area.x,
            area.y,
            FRAME_WIDTH.min(area.width),
            FRAME_HEIGHT.min(area.height),
        )
    }

    fn block() -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
    }

    /// Area inside the border
    pub fn inner(area: Rect) -> Rect {
        Self::block().inner(Self::bounds(area))
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let bounds = Self::bounds(area);
        // Need at least two cells each way for the corners
        if bounds.width < 2 || bounds.height < 2 {
            return;
        }
        Self::block().render(bounds, buf);
    }
}
