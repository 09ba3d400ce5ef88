//! TUI Frontend (ratatui-based)
//!
//! The display tree (frame -> arena -> title card) plus the `Frontend`
//! implementation that mounts it in a real terminal.

pub mod app;
pub mod arena;
pub mod frame;
pub mod render;
pub mod title_card;

pub use app::TuiFrontend;
pub use render::{render_to_string, RenderOptions};
