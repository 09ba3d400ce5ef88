//! Render entry point options plus headless rendering.
//!
//! `render_to_string` draws the display tree into an in-memory buffer with no
//! terminal attached; the `snapshot` subcommand and the tests use it.

use super::arena::Arena;
use crate::core::GameContext;
use ratatui::{buffer::Buffer, layout::Rect};

/// Options for mounting the display tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Capture log output while mounted and replay it once the terminal is
    /// restored. Off means nothing intercepts output.
    pub patch_console: bool,
}

pub fn render_to_buffer(ctx: Option<GameContext<'_>>, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    Arena::new(ctx).render(area, &mut buf);
    buf
}

/// Plain-text rows of `buf`, joined with `\n`. Trailing spaces are kept.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y + area.height {
        let mut row = String::with_capacity(area.width as usize);
        for x in area.x..area.x + area.width {
            row.push_str(buf[(x, y)].symbol());
        }
        rows.push(row);
    }
    rows.join("\n")
}

pub fn render_to_string(ctx: Option<GameContext<'_>>, width: u16, height: u16) -> String {
    buffer_to_string(&render_to_buffer(ctx, width, height))
}
