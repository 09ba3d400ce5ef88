//! The state container
//!
//! `Game` owns the single live `GameState`. The event loop is the only
//! writer (through `set_screen`); display components borrow the state via a
//! [`GameContext`] handed down the tree.

use super::context::GameContext;
use super::state::{GameState, Screen};

/// Owner of the game state plus the redraw flag frontends poll
#[derive(Debug)]
pub struct Game {
    state: GameState,

    /// Bumped on every state replacement
    generation: u64,

    /// Set whenever the state changes; cleared after a frame is drawn
    dirty: bool,
}

impl Game {
    pub fn new(initial: GameState) -> Self {
        Self {
            state: initial,
            generation: 0,
            // First frame always has to be drawn
            dirty: true,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Replace the state with one on `next`, keeping the title
    pub fn set_screen(&mut self, next: impl Into<Screen>) {
        let next = next.into();
        tracing::debug!(from = %self.state.screen, to = %next, "set_screen");

        let current = std::mem::take(&mut self.state);
        self.state = current.with_screen(next);
        self.generation += 1;
        self.dirty = true;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Force a redraw on the next pass (e.g. after a terminal resize)
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    /// Handle for display components
    pub fn context(&self) -> GameContext<'_> {
        GameContext::new(&self.state)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}
