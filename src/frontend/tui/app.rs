use super::arena::Arena;
use crate::core::Game;
use crate::frontend::{Frontend, FrontendEvent};
use crate::logging::{self, ConsoleCapture};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// TUI Frontend using ratatui
///
/// Renders the display tree with ratatui and reads input via crossterm.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    /// Log records held back while mounted; replayed to stderr on cleanup
    capture: Option<ConsoleCapture>,
    restored: bool,
}

/// Run `rollback` when `result` failed, then hand the original result back
fn rollback_on_err<T>(
    result: io::Result<T>,
    rollback: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    if result.is_err() {
        let _ = rollback();
    }
    result
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode and enters the alternate screen. With
    /// a `capture` handle, captured log records are printed once the terminal
    /// is restored.
    pub fn new(capture: Option<ConsoleCapture>) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        // Self doesn't exist yet, so Drop can't undo raw mode on failure
        rollback_on_err(execute!(stdout, EnterAlternateScreen), disable_raw_mode)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let leave = || {
            execute!(io::stdout(), LeaveAlternateScreen)?;
            disable_raw_mode()
        };
        let mut terminal =
            rollback_on_err(Terminal::new(backend), leave).context("Failed to create terminal")?;
        rollback_on_err(terminal.hide_cursor(), leave).context("Failed to hide cursor")?;

        tracing::debug!(patch_console = capture.is_some(), "terminal mounted");

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(16), // ~60 FPS
            capture,
            restored: false,
        })
    }

    /// Set poll timeout (for controlling frame rate)
    pub fn set_poll_timeout(&mut self, timeout: Duration) {
        self.poll_timeout = timeout;
    }

    /// Convert crossterm event to FrontendEvent
    fn convert_event(event: Event) -> Option<FrontendEvent> {
        match event {
            Event::Key(key_event) => {
                // Only key presses; repeats and releases are ignored
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
                if key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Some(FrontendEvent::Quit);
                }
                Some(FrontendEvent::key(key_event.code, key_event.modifiers))
            }
            Event::Resize(w, h) => Some(FrontendEvent::resize(w, h)),
            _ => None,
        }
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Wait up to the poll timeout for the first event, then drain the rest
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = Self::convert_event(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, game: &Game) -> Result<()> {
        self.terminal
            .draw(|f| {
                let area = f.area();
                Arena::new(Some(game.context())).render(area, f.buffer_mut());
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;

        if let Some(capture) = &self.capture {
            logging::replay(capture, &mut io::stderr())?;
        }
        Ok(())
    }

    fn size(&self) -> (u16, u16) {
        let size = self.terminal.size().unwrap_or_default();
        (size.width, size.height)
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}
