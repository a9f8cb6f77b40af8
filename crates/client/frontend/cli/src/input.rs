//! Keyboard decoding.
//!
//! Owns the key-to-input mapping so the host never looks at raw `crossterm`
//! events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::{CardinalDirection, InputEvent};

/// Translates a key press into an engine input; `None` for keys with no meaning.
pub fn decode(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(InputEvent::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => InputEvent::Move(CardinalDirection::North),
        KeyCode::Down | KeyCode::Char('j' | 's') => InputEvent::Move(CardinalDirection::South),
        KeyCode::Left | KeyCode::Char('h' | 'a') => InputEvent::Move(CardinalDirection::West),
        KeyCode::Right | KeyCode::Char('l' | 'd') => InputEvent::Move(CardinalDirection::East),
        KeyCode::Enter | KeyCode::Char(' ') => InputEvent::Confirm,
        KeyCode::Esc | KeyCode::Backspace => InputEvent::Cancel,
        KeyCode::F(1) | KeyCode::Char('?') => InputEvent::Help,
        KeyCode::Char('q') => InputEvent::Quit,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_letters_walk() {
        assert_eq!(
            decode(press(KeyCode::Up)),
            Some(InputEvent::Move(CardinalDirection::North))
        );
        assert_eq!(
            decode(press(KeyCode::Char('h'))),
            Some(InputEvent::Move(CardinalDirection::West))
        );
        assert_eq!(
            decode(press(KeyCode::Char('d'))),
            Some(InputEvent::Move(CardinalDirection::East))
        );
    }

    #[test]
    fn menu_keys() {
        assert_eq!(decode(press(KeyCode::Enter)), Some(InputEvent::Confirm));
        assert_eq!(decode(press(KeyCode::Esc)), Some(InputEvent::Cancel));
        assert_eq!(decode(press(KeyCode::F(1))), Some(InputEvent::Help));
        assert_eq!(decode(press(KeyCode::Tab)), None);
    }

    #[test]
    fn quit_needs_q_or_ctrl_c() {
        assert_eq!(decode(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_c), Some(InputEvent::Quit));
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert_eq!(decode(ctrl_w), None);
    }

    #[test]
    fn releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(decode(release), None);
    }
}
