//! Key handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{AppEvent, AppPhase, Panel, SelectionState};

/// Key action that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    JumpToTop,
    JumpToBottom,

    // Panels
    SwitchPanel,

    // Selection
    Confirm,
    Cancel,

    // UI toggles
    ToggleTheme,

    // Application
    Quit,
    ForceQuit,

    // No action
    None,
}

impl KeyAction {
    /// Convert a key event to an action.
    pub fn from_key_event(event: KeyEvent) -> Self {
        match (event.code, event.modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::ForceQuit,

            // Esc closes the command modal
            (KeyCode::Esc, _) => KeyAction::Cancel,

            // Navigation - vim style
            (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::MoveDown,
            (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::MoveUp,

            // Navigation - arrow keys
            (KeyCode::Down, _) => KeyAction::MoveDown,
            (KeyCode::Up, _) => KeyAction::MoveUp,

            // Jump
            (KeyCode::Char('g'), KeyModifiers::NONE) => KeyAction::JumpToTop,
            (KeyCode::Char('G'), KeyModifiers::SHIFT) => KeyAction::JumpToBottom,
            (KeyCode::Home, _) => KeyAction::JumpToTop,
            (KeyCode::End, _) => KeyAction::JumpToBottom,

            // Page navigation
            (KeyCode::PageUp, _) => KeyAction::PageUp,
            (KeyCode::PageDown, _) => KeyAction::PageDown,

            (KeyCode::Tab, KeyModifiers::NONE) => KeyAction::SwitchPanel,
            (KeyCode::BackTab, _) => KeyAction::SwitchPanel,

            (KeyCode::Enter, _) => KeyAction::Confirm,

            (KeyCode::Char('t'), KeyModifiers::NONE) => KeyAction::ToggleTheme,

            _ => KeyAction::None,
        }
    }

    /// The state machine event for this action.
    ///
    /// Returns `None` for actions handled outside the state machine.
    pub fn to_event(self) -> Option<AppEvent> {
        let event = match self {
            KeyAction::MoveUp => AppEvent::MoveUp,
            KeyAction::MoveDown => AppEvent::MoveDown,
            KeyAction::PageUp => AppEvent::PageUp,
            KeyAction::PageDown => AppEvent::PageDown,
            KeyAction::JumpToTop => AppEvent::JumpToTop,
            KeyAction::JumpToBottom => AppEvent::JumpToBottom,
            KeyAction::SwitchPanel => AppEvent::SwitchPanel,
            KeyAction::Confirm => AppEvent::Enter,
            KeyAction::Cancel => AppEvent::CloseModal,
            KeyAction::Quit => AppEvent::Quit,
            KeyAction::ForceQuit => AppEvent::Interrupt,
            KeyAction::ToggleTheme | KeyAction::None => return None,
        };
        Some(event)
    }
}

/// Key binding for display in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn binding(keys: &'static str, description: &'static str) -> KeyBinding {
    KeyBinding { keys, description }
}

/// Footer hints for the current context.
pub fn hint_bindings(state: &SelectionState) -> Vec<KeyBinding> {
    match state.phase() {
        AppPhase::Selecting if state.modal_visible() => vec![
            binding("Esc", "Cancel"),
            binding("Enter", "Select"),
        ],
        AppPhase::Selecting => match state.panel() {
            Panel::Selector => vec![
                binding("↑↓", "Navigate"),
                binding("Enter", "Select"),
                binding("Tab", "Switch to Preview"),
                binding("q", "Quit"),
            ],
            Panel::Preview => vec![
                binding("↑↓", "Scroll"),
                binding("Tab", "Switch to Selector"),
                binding("q", "Quit"),
            ],
        },
        AppPhase::Failed | AppPhase::Done => vec![binding("q", "Quit")],
        AppPhase::Loading | AppPhase::Running => vec![binding("Ctrl-C", "Quit")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Up)), KeyAction::MoveUp);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('j'))), KeyAction::MoveDown);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Tab)), KeyAction::SwitchPanel);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Esc)), KeyAction::Cancel);
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            KeyAction::JumpToBottom
        );
        assert_eq!(
            KeyAction::from_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::ForceQuit
        );
        assert_eq!(KeyAction::from_key_event(key(KeyCode::Char('x'))), KeyAction::None);
    }

    #[test]
    fn test_to_event() {
        assert!(matches!(KeyAction::Quit.to_event(), Some(AppEvent::Quit)));
        assert!(matches!(KeyAction::ForceQuit.to_event(), Some(AppEvent::Interrupt)));
        assert!(matches!(KeyAction::Cancel.to_event(), Some(AppEvent::CloseModal)));
        assert!(KeyAction::ToggleTheme.to_event().is_none());
        assert!(KeyAction::None.to_event().is_none());
    }

    #[test]
    fn test_hints_follow_context() {
        let mut state = SelectionState::new("/app/.env");
        assert_eq!(hint_bindings(&state)[0].keys, "Ctrl-C");

        state.dispatch(AppEvent::Init);
        state.dispatch(AppEvent::CatalogLoaded(Ok(envswitch_catalog::Catalog {
            files: vec![envswitch_core::EnvFile::new(".env.a", "/app/.env.a")],
            ..Default::default()
        })));
        let hints = hint_bindings(&state);
        assert_eq!(hints[2].description, "Switch to Preview");

        state.dispatch(AppEvent::SwitchPanel);
        assert_eq!(hint_bindings(&state)[0].description, "Scroll");
    }
}
