//! Title card: the game title above the start prompt.
//!
//! The card's area is split 85/15 vertically. The title is centered in the
//! upper region, the prompt in the lower one.

use crate::core::{context, GameContext};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

pub const PROMPT: &str = "[Press any key to start...]";

pub struct TitleCard<'a> {
    ctx: Option<GameContext<'a>>,
}

impl<'a> TitleCard<'a> {
    pub fn new(ctx: Option<GameContext<'a>>) -> Self {
        Self { ctx }
    }

    /// Split `area` into (title region, prompt region)
    pub fn regions(area: Rect) -> (Rect, Rect) {
        let [title, prompt] =
            Layout::vertical([Constraint::Percentage(85), Constraint::Percentage(15)])
                .areas(area);
        (title, prompt)
    }

    /// Break `text` into rows no wider than `width`, honouring `\n`
    pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
        let width = usize::from(width.max(1));
        let mut rows = Vec::new();
        for line in text.split('\n') {
            let chars: Vec<char> = line.chars().collect();
            if chars.is_empty() {
                rows.push(String::new());
                continue;
            }
            rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        }
        rows
    }

    /// Strip of `rows` lines in the vertical middle of `area`
    fn middle_strip(area: Rect, rows: u16) -> Rect {
        let height = rows.min(area.height);
        Rect {
            y: area.y + (area.height - height) / 2,
            height,
            ..area
        }
    }

    fn render_centered(text: &str, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines: Vec<Line> = Self::wrap_lines(text, area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        let strip = Self::middle_strip(area, u16::try_from(lines.len()).unwrap_or(u16::MAX));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(strip, buf);
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let state = context::resolve(self.ctx);
        let (title_area, prompt_area) = Self::regions(area);

        Self::render_centered(&state.title, title_area, buf);
        Self::render_centered(PROMPT, prompt_area, buf);
    }
}
