//! Arena: the outer frame with the title card placed inside it.

use super::frame::OuterFrame;
use super::title_card::TitleCard;
use crate::core::GameContext;
use ratatui::{buffer::Buffer, layout::Rect};

/// Root of the display tree
///
/// Reads the shared state through the context it is given; it never keeps a
/// copy of its own.
pub struct Arena<'a> {
    ctx: Option<GameContext<'a>>,
}

impl<'a> Arena<'a> {
    pub fn new(ctx: Option<GameContext<'a>>) -> Self {
        Self { ctx }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        OuterFrame::new().render(area, buf);

        let inner = OuterFrame::inner(area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        TitleCard::new(self.ctx).render(inner, buf);
    }
}
