//! Explicit state distribution for the display tree.
//!
//! Components take a `GameContext` (or `None`) as a constructor argument
//! instead of looking state up from anywhere ambient.

use super::state::GameState;
use std::sync::OnceLock;

/// Read handle on the live game state
#[derive(Clone, Copy, Debug)]
pub struct GameContext<'a> {
    state: &'a GameState,
}

impl<'a> GameContext<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &'a GameState {
        self.state
    }
}

/// Resolve an optional context to a state, using the default state when no
/// context was provided
pub fn resolve(ctx: Option<GameContext<'_>>) -> &GameState {
    match ctx {
        Some(ctx) => ctx.state(),
        None => fallback_state(),
    }
}

fn fallback_state() -> &'static GameState {
    static FALLBACK: OnceLock<GameState> = OnceLock::new();
    FALLBACK.get_or_init(GameState::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_TITLE;

    #[test]
    fn test_resolve_without_context() {
        assert_eq!(resolve(None).title, DEFAULT_TITLE);
    }

    #[test]
    fn test_resolve_borrows_not_copies() {
        let state = GameState::with_title(Some("FOO GAME"));
        let resolved = resolve(Some(GameContext::new(&state)));
        assert!(std::ptr::eq(resolved, &state));
    }
}
