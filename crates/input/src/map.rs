//! Key mapping from terminal events to game intents.

use crate::types::{Direction, Intent, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key to the player's intent. Letters are case-insensitive.
pub fn map_key(key: Key) -> Intent {
    match key {
        Key::Arrow(dir) => Intent::SetDirection(dir),
        Key::Interrupt => Intent::Quit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' => Intent::SetDirection(Direction::Up),
            'a' => Intent::SetDirection(Direction::Left),
            's' => Intent::SetDirection(Direction::Down),
            'd' => Intent::SetDirection(Direction::Right),
            'q' => Intent::Quit,
            'r' => Intent::Restart,
            _ => Intent::NoOp,
        },
        Key::Other => Intent::NoOp,
    }
}

/// Translate a crossterm key event into a [`Key`].
///
/// Only presses count. Windows consoles also report releases, which would
/// otherwise double every keystroke.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }

    let key = match event.code {
        KeyCode::Up => Key::Arrow(Direction::Up),
        KeyCode::Down => Key::Arrow(Direction::Down),
        KeyCode::Left => Key::Arrow(Direction::Left),
        KeyCode::Right => Key::Arrow(Direction::Right),
        KeyCode::Char('c') | KeyCode::Char('C')
            if event.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Key::Interrupt
        }
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(key)
}

/// Convenience wrapper: crossterm event straight to intent.
pub fn map_key_event(event: KeyEvent) -> Intent {
    key_from_event(event).map(map_key).unwrap_or(Intent::NoOp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            map_key(Key::Char('w')),
            Intent::SetDirection(Direction::Up)
        );
        assert_eq!(
            map_key(Key::Char('a')),
            Intent::SetDirection(Direction::Left)
        );
        assert_eq!(
            map_key(Key::Char('s')),
            Intent::SetDirection(Direction::Down)
        );
        assert_eq!(
            map_key(Key::Char('d')),
            Intent::SetDirection(Direction::Right)
        );

        assert_eq!(
            map_key(Key::Char('W')),
            Intent::SetDirection(Direction::Up)
        );
        assert_eq!(
            map_key(Key::Char('A')),
            Intent::SetDirection(Direction::Left)
        );
        assert_eq!(
            map_key(Key::Char('S')),
            Intent::SetDirection(Direction::Down)
        );
        assert_eq!(
            map_key(Key::Char('D')),
            Intent::SetDirection(Direction::Right)
        );
    }

    #[test]
    fn test_arrow_keys() {
        for dir in Direction::ALL {
            assert_eq!(map_key(Key::Arrow(dir)), Intent::SetDirection(dir));
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(Key::Char('q')), Intent::Quit);
        assert_eq!(map_key(Key::Char('Q')), Intent::Quit);
        assert_eq!(map_key(Key::Char('r')), Intent::Restart);
        assert_eq!(map_key(Key::Char('R')), Intent::Restart);
        assert_eq!(map_key(Key::Interrupt), Intent::Quit);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(map_key(Key::Char('x')), Intent::NoOp);
        assert_eq!(map_key(Key::Char(' ')), Intent::NoOp);
        assert_eq!(map_key(Key::Char('é')), Intent::NoOp);
        assert_eq!(map_key(Key::Other), Intent::NoOp);
    }

    #[test]
    fn test_crossterm_events() {
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Up)),
            Intent::SetDirection(Direction::Up)
        );
        assert_eq!(
            map_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Intent::SetDirection(Direction::Right)
        );
        assert_eq!(
            map_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Intent::Quit
        );
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('c'))), Intent::NoOp);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Esc)), Intent::NoOp);
    }

    #[test]
    fn test_release_events_are_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(key_from_event(release), None);
        assert_eq!(map_key_event(release), Intent::NoOp);
    }
}
