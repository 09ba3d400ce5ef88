//! Core game logic layer
//!
//! Owns the game state and the container that hands it to the display tree.
//! NO imports from frontend/ or rendering code.

pub mod context;
pub mod game;
pub mod state;

pub use context::GameContext;
pub use game::Game;
pub use state::{GameState, Screen, DEFAULT_TITLE};
