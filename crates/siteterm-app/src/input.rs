//! crossterm key events -> terminal key events.

use crossterm::event::{KeyCode, KeyEvent as CtKeyEvent, KeyEventKind, KeyModifiers};
use siteterm_types::input::KeyEvent;

/// Result of handling a single input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// Map a crossterm key press. Releases and unbound keys map to `None`.
pub fn map_key(event: &CtKeyEvent) -> Option<KeyEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyEvent::Quit,
        KeyCode::Char('t') if ctrl => KeyEvent::ToggleTheme,
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => KeyEvent::Char(ch),
        KeyCode::Esc => KeyEvent::Quit,
        KeyCode::F(2) => KeyEvent::ToggleTheme,
        KeyCode::Enter => KeyEvent::Enter,
        KeyCode::Tab => KeyEvent::Tab,
        KeyCode::Up => KeyEvent::ArrowUp,
        KeyCode::Down => KeyEvent::ArrowDown,
        KeyCode::Left => KeyEvent::ArrowLeft,
        KeyCode::Right => KeyEvent::ArrowRight,
        KeyCode::Home => KeyEvent::Home,
        KeyCode::End => KeyEvent::End,
        KeyCode::Backspace => KeyEvent::Backspace,
        KeyCode::Delete => KeyEvent::Delete,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> CtKeyEvent {
        CtKeyEvent::new(code, modifiers)
    }

    #[test]
    fn text_and_editing_keys() {
        assert_eq!(
            map_key(&press(KeyCode::Char('a'), KeyModifiers::NONE)),
            Some(KeyEvent::Char('a'))
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(KeyEvent::Char('A'))
        );
        assert_eq!(
            map_key(&press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(KeyEvent::Backspace)
        );
    }

    #[test]
    fn terminal_keys() {
        assert_eq!(
            map_key(&press(KeyCode::Tab, KeyModifiers::NONE)),
            Some(KeyEvent::Tab)
        );
        assert_eq!(
            map_key(&press(KeyCode::Up, KeyModifiers::NONE)),
            Some(KeyEvent::ArrowUp)
        );
        assert_eq!(
            map_key(&press(KeyCode::Enter, KeyModifiers::NONE)),
            Some(KeyEvent::Enter)
        );
    }

    #[test]
    fn host_keys() {
        assert_eq!(
            map_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyEvent::Quit)
        );
        assert_eq!(
            map_key(&press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(KeyEvent::Quit)
        );
        assert_eq!(
            map_key(&press(KeyCode::F(2), KeyModifiers::NONE)),
            Some(KeyEvent::ToggleTheme)
        );
        assert_eq!(
            map_key(&press(KeyCode::Char('t'), KeyModifiers::CONTROL)),
            Some(KeyEvent::ToggleTheme)
        );
    }

    #[test]
    fn unbound_keys_ignored() {
        assert_eq!(map_key(&press(KeyCode::F(5), KeyModifiers::NONE)), None);
        assert_eq!(
            map_key(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn releases_ignored() {
        let mut ev = press(KeyCode::Char('a'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(&ev), None);
    }
}
