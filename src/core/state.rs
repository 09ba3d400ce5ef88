//! Game state management
//!
//! Holds the one record every display component reads: the game title and
//! the screen the game is currently on.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Title used when no title is configured or supplied
pub const DEFAULT_TITLE: &str = "TDD Roguelike!";

/// Screen tag
///
/// Only the title screen exists so far. Any other name is kept verbatim;
/// screen names are never validated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Title,
    Named(String),
}

impl Screen {
    pub fn name(&self) -> &str {
        match self {
            Screen::Title => "title",
            Screen::Named(name) => name,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Screen::from(s))
    }
}

impl From<&str> for Screen {
    fn from(name: &str) -> Self {
        match name {
            "title" => Screen::Title,
            other => Screen::Named(other.to_string()),
        }
    }
}

impl From<String> for Screen {
    fn from(name: String) -> Self {
        if name == "title" {
            Screen::Title
        } else {
            Screen::Named(name)
        }
    }
}

/// Game session state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Text shown on the title card
    pub title: String,

    /// Screen the game is on
    pub screen: Screen,
}

impl GameState {
    pub fn new(title: impl Into<String>, screen: Screen) -> Self {
        Self {
            title: title.into(),
            screen,
        }
    }

    /// Build a title-screen state, falling back to [`DEFAULT_TITLE`] when
    /// the title is missing or blank
    pub fn with_title(title: Option<&str>) -> Self {
        let title = match title {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };
        Self::new(title, Screen::Title)
    }

    /// New state with `screen` replaced; the title carries over untouched
    pub fn with_screen(self, screen: Screen) -> Self {
        Self { screen, ..self }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, Screen::Title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = GameState::default();
        assert_eq!(state.title, "TDD Roguelike!");
        assert_eq!(state.screen, Screen::Title);
    }

    #[test]
    fn test_with_title_fallback() {
        assert_eq!(GameState::with_title(None).title, DEFAULT_TITLE);
        assert_eq!(GameState::with_title(Some("   ")).title, DEFAULT_TITLE);
        assert_eq!(GameState::with_title(Some("FOO GAME")).title, "FOO GAME");
    }

    #[test]
    fn test_with_title_keeps_text_verbatim() {
        assert_eq!(GameState::with_title(Some("  FOO GAME  ")).title, "  FOO GAME  ");
        assert_eq!(GameState::with_title(Some("FOO\nGAME")).title, "FOO\nGAME");
    }

    #[test]
    fn test_with_screen_preserves_title() {
        let state = GameState::with_title(Some("FOO GAME")).with_screen(Screen::from("start"));
        assert_eq!(state.title, "FOO GAME");
        assert_eq!(state.screen, Screen::Named("start".to_string()));
    }

    #[test]
    fn test_screen_names() {
        assert_eq!(Screen::from("title"), Screen::Title);
        assert_eq!(Screen::from(String::from("title")), Screen::Title);
        assert_eq!("dungeon".parse::<Screen>(), Ok(Screen::Named("dungeon".into())));
        assert_eq!(Screen::Title.to_string(), "title");
        // No validation: anything goes, including the empty string
        assert_eq!(Screen::from("").name(), "");
    }
}
