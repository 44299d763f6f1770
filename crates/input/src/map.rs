//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to a game action.
///
/// Up rotates anti-clockwise and Down clockwise, matching the browser
/// bindings. Releases map to nothing.
pub fn action_for_key(key: KeyEvent) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::ShiftLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::ShiftRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(GameAction::RotateCcw),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::RotateCw),
        KeyCode::Char(' ') => Some(GameAction::Drop),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::ShiftLeft)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::ShiftRight)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCcw)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Drop)
        );
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(GameAction::ShiftLeft)
        );
        assert_eq!(
            action_for_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::RotateCw)
        );
        assert_eq!(action_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_repeat_maps_and_release_does_not() {
        let repeat = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Repeat,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(repeat), Some(GameAction::ShiftLeft));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            ..repeat
        };
        assert_eq!(action_for_key(release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
