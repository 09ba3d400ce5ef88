//! TDD Roguelike - terminal roguelike scaffold
//!
//! Mounts the title screen (frame -> arena -> title card) in the terminal and
//! drives it from a single game state container.

mod config;
mod core;
mod frontend;
mod logging;

use crate::core::{Game, GameState, Screen};
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use frontend::tui::frame::{FRAME_HEIGHT, FRAME_WIDTH};
use frontend::{Frontend, FrontendEvent, TuiFrontend};
use logging::ConsoleCapture;
use std::path::PathBuf;

#[derive(ClapParser, Debug)]
#[command(name = "tdd-roguelike")]
#[command(about = "Terminal roguelike title screen", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.tdd-roguelike)
    /// Can also be set via TDD_ROGUELIKE_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Title to show instead of the configured one
    #[arg(long)]
    title: Option<String>,

    /// Capture log output while the TUI runs and print it on exit
    #[arg(long)]
    patch_console: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print one rendered frame as plain text and exit
    Snapshot {
        #[arg(long, default_value_t = FRAME_WIDTH)]
        width: u16,

        #[arg(long, default_value_t = FRAME_HEIGHT)]
        height: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var(config::DATA_DIR_ENV, data_dir);
    }
    let base_dir = config::Config::base_dir()?;
    std::fs::create_dir_all(&base_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", base_dir))?;

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };

    let mut options = config.render_options();
    options.patch_console |= cli.patch_console;

    // TUI apps can't log to stdout: either a log file or the capture buffer
    let capture = options.patch_console.then(ConsoleCapture::new);
    logging::init(&config::Config::log_path()?, capture.as_ref())?;
    tracing::info!("Using data directory {:?}", base_dir);

    let initial = initial_state(&config, cli.title.as_deref());

    match cli.command {
        Some(Commands::Snapshot { width, height }) => {
            let game = Game::new(initial);
            println!(
                "{}",
                frontend::tui::render_to_string(Some(game.context()), width, height)
            );

            if let Some(capture) = &capture {
                logging::replay(capture, &mut std::io::stderr())?;
            }
        }
        None => {
            let mut frontend = TuiFrontend::new(capture)?;
            frontend.set_poll_timeout(config.poll_timeout());

            // cleanup() restores the terminal, then replays captured logs
            let result = run_tui(&mut frontend, Game::new(initial));
            frontend.cleanup()?;
            result?;
        }
    }

    Ok(())
}

/// Configured starting state, with the `--title` override applied
fn initial_state(config: &config::Config, title_override: Option<&str>) -> GameState {
    let state = config.initial_state();
    match title_override {
        Some(title) => GameState::with_title(Some(title)).with_screen(state.screen),
        None => state,
    }
}

/// Main loop: redraw when the state changed, then handle input
fn run_tui(frontend: &mut impl Frontend, mut game: Game) -> Result<()> {
    let (width, height) = frontend.size();
    tracing::info!(width, height, title = %game.state().title, "title screen mounted");

    loop {
        if game.needs_redraw() {
            frontend.render(&game)?;
            game.mark_drawn();
        }

        for event in frontend.poll_events()? {
            if !handle_event(&mut game, &event) {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }
}

/// Apply one event to the game. Returns false when the session should end.
fn handle_event(game: &mut Game, event: &FrontendEvent) -> bool {
    if event.is_quit() {
        return false;
    }

    match event {
        FrontendEvent::Resize { width, height } => {
            tracing::debug!(width, height, "terminal resized");
            game.invalidate();
        }
        FrontendEvent::Key { code, .. } => {
            if game.state().screen == Screen::Title {
                tracing::info!(key = ?code, "starting from title screen");
                game.set_screen("start");
            }
        }
        FrontendEvent::Quit => {}
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::collections::VecDeque;

    /// Frontend that replays scripted event batches and records frames
    struct ScriptedFrontend {
        batches: VecDeque<Vec<FrontendEvent>>,
        frames: Vec<String>,
    }

    impl ScriptedFrontend {
        fn new(batches: Vec<Vec<FrontendEvent>>) -> Self {
            Self {
                batches: batches.into(),
                frames: Vec::new(),
            }
        }
    }

    impl Frontend for ScriptedFrontend {
        fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
            Ok(self
                .batches
                .pop_front()
                .unwrap_or_else(|| vec![FrontendEvent::Quit]))
        }

        fn render(&mut self, game: &Game) -> Result<()> {
            self.frames.push(frontend::tui::render_to_string(
                Some(game.context()),
                FRAME_WIDTH,
                FRAME_HEIGHT,
            ));
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            Ok(())
        }

        fn size(&self) -> (u16, u16) {
            (FRAME_WIDTH, FRAME_HEIGHT)
        }
    }

    fn key(code: KeyCode) -> FrontendEvent {
        FrontendEvent::key(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_any_key_starts_and_keeps_title() {
        let mut game = Game::new(GameState::with_title(Some("FOO GAME")));
        assert!(handle_event(&mut game, &key(KeyCode::Enter)));
        assert_eq!(game.state().screen, Screen::from("start"));
        assert_eq!(game.state().title, "FOO GAME");

        // Already started: further keys don't replace the state again
        assert!(handle_event(&mut game, &key(KeyCode::Char('x'))));
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_quit_and_resize() {
        let mut game = Game::default();
        game.mark_drawn();

        assert!(handle_event(&mut game, &FrontendEvent::resize(100, 50)));
        assert!(game.needs_redraw());
        assert_eq!(game.state().screen, Screen::Title);

        assert!(!handle_event(&mut game, &key(KeyCode::Esc)));
    }

    #[test]
    fn test_run_tui_redraws_only_on_change() {
        let mut frontend = ScriptedFrontend::new(vec![
            vec![],
            vec![key(KeyCode::Char(' '))],
            vec![],
            vec![FrontendEvent::resize(90, 50)],
            vec![key(KeyCode::Char('q'))],
        ]);

        run_tui(&mut frontend, Game::default()).unwrap();

        // Initial frame, after the start key, after the resize
        assert_eq!(frontend.frames.len(), 3);
        assert!(frontend.frames.iter().all(|f| f.contains("TDD Roguelike!")));
        assert!(frontend
            .frames
            .iter()
            .all(|f| f.contains("[Press any key to start...]")));
        assert_eq!(frontend.frames[0], frontend.frames[1]);
    }

    #[test]
    fn test_title_override() {
        let config = config::Config::default();
        assert_eq!(initial_state(&config, None).title, "TDD Roguelike!");
        assert_eq!(initial_state(&config, Some("FOO GAME")).title, "FOO GAME");
        assert_eq!(initial_state(&config, Some("")).title, "TDD Roguelike!");
        assert_eq!(initial_state(&config, Some("  FOO GAME  ")).title, "  FOO GAME  ");
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["tdd-roguelike", "--title", "FOO GAME", "--patch-console"])
            .unwrap();
        assert_eq!(cli.title.as_deref(), Some("FOO GAME"));
        assert!(cli.patch_console);
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["tdd-roguelike", "snapshot", "--width", "100"]).unwrap();
        match cli.command {
            Some(Commands::Snapshot { width, height }) => {
                assert_eq!(width, 100);
                assert_eq!(height, FRAME_HEIGHT);
            }
            other => panic!("Expected snapshot command, got {:?}", other),
        }
    }
}
