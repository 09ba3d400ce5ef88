//! Frontend abstraction layer
//!
//! Defines the `Frontend` trait the event loop drives: poll input, draw the
//! current game, restore the terminal on the way out.

pub mod events;
pub mod tui;

use crate::core::Game;
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns every pending event (empty if none arrived within the poll
    /// timeout).
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Draw the display tree for the current game state
    fn render(&mut self, game: &Game) -> Result<()>;

    /// Restore the terminal before exit
    fn cleanup(&mut self) -> Result<()>;

    /// Current terminal size as `(width, height)`
    fn size(&self) -> (u16, u16);
}
