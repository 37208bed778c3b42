//! Keybindings: Ctrl+K/Ctrl+P palette, arrows move, Enter select, Esc close, Ctrl+R reload.

use crate::actions::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, palette_visible: bool) -> Option<Action> {
    // Press and Repeat only; Release would double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);
    let ctrl = mods.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('k') | KeyCode::Char('p') => Some(Action::PaletteToggle),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Char('l') => Some(Action::ClearInput),
            _ => None,
        };
    }

    if palette_visible {
        return match code {
            KeyCode::Esc => Some(Action::PaletteHide),
            KeyCode::Up => Some(Action::PaletteUp),
            KeyCode::Down | KeyCode::Tab => Some(Action::PaletteDown),
            KeyCode::BackTab => Some(Action::PaletteUp),
            KeyCode::Enter => Some(Action::PaletteSelect),
            KeyCode::Backspace => Some(Action::Backspace),
            // Alt is allowed for accented characters; only Ctrl/Cmd are blocked.
            KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) => Some(Action::Char(c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') if mods.is_empty() => Some(Action::Quit),
        KeyCode::Char('/') if mods.is_empty() => Some(Action::PaletteToggle),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ShowsUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ShowsDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn ctrl_k_and_ctrl_p_toggle_palette() {
        for c in ['k', 'p'] {
            for visible in [false, true] {
                assert_eq!(
                    key_to_action(&key(KeyCode::Char(c), KeyModifiers::CONTROL), visible),
                    Some(Action::PaletteToggle)
                );
            }
        }
    }

    #[test]
    fn arrows_move_cursor_only_while_palette_open() {
        assert_eq!(key_to_action(&key(KeyCode::Down, KeyModifiers::NONE), true), Some(Action::PaletteDown));
        assert_eq!(key_to_action(&key(KeyCode::Up, KeyModifiers::NONE), true), Some(Action::PaletteUp));
        assert_eq!(key_to_action(&key(KeyCode::Down, KeyModifiers::NONE), false), Some(Action::ShowsDown));
    }

    #[test]
    fn letters_are_query_input_while_palette_open() {
        assert_eq!(key_to_action(&key(KeyCode::Char('q'), KeyModifiers::NONE), true), Some(Action::Char('q')));
        assert_eq!(key_to_action(&key(KeyCode::Char('q'), KeyModifiers::NONE), false), Some(Action::Quit));
        assert_eq!(
            key_to_action(&key(KeyCode::Char('ñ'), KeyModifiers::ALT), true),
            Some(Action::Char('ñ'))
        );
    }

    #[test]
    fn enter_selects_and_esc_closes() {
        assert_eq!(key_to_action(&key(KeyCode::Enter, KeyModifiers::NONE), true), Some(Action::PaletteSelect));
        assert_eq!(key_to_action(&key(KeyCode::Esc, KeyModifiers::NONE), true), Some(Action::PaletteHide));
        assert_eq!(key_to_action(&key(KeyCode::Esc, KeyModifiers::NONE), false), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut event = key(KeyCode::Char('k'), KeyModifiers::CONTROL);
        event.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&event, false), None);
    }
}
