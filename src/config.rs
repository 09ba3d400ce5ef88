//! Configuration loader plus strongly typed settings structures.
//!
//! The default `config.toml` is embedded at compile time and written to the
//! data directory on first run. Keys missing from a user file fall back to
//! the defaults.

use crate::core::{GameState, Screen, DEFAULT_TITLE};
use crate::frontend::tui::RenderOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "TDD_ROGUELIKE_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

/// Initial game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_screen")]
    pub screen: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub patch_console: bool,
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_screen() -> String {
    "title".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    16
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            screen: default_screen(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            patch_console: false,
            poll_timeout_ms: default_poll_timeout_ms(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the data directory, creating it from the
    /// embedded default if it doesn't exist yet
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::write_default(&path)?;
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn write_default(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {:?}", parent))?;
        }
        fs::write(path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write default config: {:?}", path))?;
        tracing::info!("Created default config at {:?}", path);
        Ok(())
    }

    /// Starting state for the game; a blank title falls back to the default
    pub fn initial_state(&self) -> GameState {
        GameState::with_title(Some(&self.game.title))
            .with_screen(Screen::from(self.game.screen.as_str()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            patch_console: self.render.patch_console,
        }
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.render.poll_timeout_ms)
    }

    /// Get the base data directory (~/.tdd-roguelike/)
    /// Can be overridden with the TDD_ROGUELIKE_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tdd-roguelike"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("tdd-roguelike.log"))
    }
}
