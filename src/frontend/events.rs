//! Frontend-agnostic input events.
//!
//! The TUI translates crossterm's event stream into this enum so the event
//! loop only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Application quit signal
    Quit,
}

impl FrontendEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    /// Whether this event should end the session (Esc, q, or a quit signal)
    pub fn is_quit(&self) -> bool {
        match self {
            FrontendEvent::Quit => true,
            FrontendEvent::Key { code, .. } => {
                matches!(code, KeyCode::Esc | KeyCode::Char('q'))
            }
            FrontendEvent::Resize { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));
    }

    #[test]
    fn test_quit_keys() {
        assert!(FrontendEvent::Quit.is_quit());
        assert!(FrontendEvent::key(KeyCode::Esc, KeyModifiers::NONE).is_quit());
        assert!(FrontendEvent::key(KeyCode::Char('q'), KeyModifiers::NONE).is_quit());

        assert!(!FrontendEvent::key(KeyCode::Char('c'), KeyModifiers::NONE).is_quit());
        assert!(!FrontendEvent::key(KeyCode::Enter, KeyModifiers::NONE).is_quit());
        assert!(!FrontendEvent::resize(80, 45).is_quit());
    }
}
