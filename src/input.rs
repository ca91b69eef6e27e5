//! Input handling - key translation

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key does while browsing the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
    StartSearch,
    NextMatch,
    PrevMatch,
    ClearSearch,
    ToggleLineNumbers,
    TextSizeUp,
    TextSizeDown,
    OpenFile,
    Redraw,
    Quit,
}

/// What a key does while the minibuffer prompt is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKey {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

/// Only key presses count; Windows also reports releases and repeats
fn is_press(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press
}

/// Translate a key event in browse mode
pub fn translate_browse(event: KeyEvent) -> Option<Action> {
    if !is_press(&event) {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl {
        return match event.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::Redraw),
            KeyCode::Char('f') => Some(Action::PageDown),
            KeyCode::Char('b') => Some(Action::PageUp),
            KeyCode::Char('s') => Some(Action::StartSearch),
            KeyCode::Char('o') => Some(Action::OpenFile),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Enter => Some(Action::ScrollDown),
        KeyCode::PageUp | KeyCode::Char('b') => Some(Action::PageUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Top),
        KeyCode::End | KeyCode::Char('G') => Some(Action::Bottom),
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Char('n') => Some(Action::NextMatch),
        KeyCode::Char('N') => Some(Action::PrevMatch),
        KeyCode::Esc => Some(Action::ClearSearch),
        KeyCode::Char('l') => Some(Action::ToggleLineNumbers),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::TextSizeUp),
        KeyCode::Char('-') => Some(Action::TextSizeDown),
        KeyCode::Char('o') => Some(Action::OpenFile),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Translate a key event in prompt mode
pub fn translate_prompt(event: KeyEvent) -> Option<PromptKey> {
    if !is_press(&event) {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('g') | KeyCode::Char('c') if ctrl => Some(PromptKey::Cancel),
        KeyCode::Char('h') if ctrl => Some(PromptKey::Backspace),
        KeyCode::Char(_) if ctrl => None,
        KeyCode::Char(ch) => Some(PromptKey::Insert(ch)),
        KeyCode::Tab => Some(PromptKey::Insert('\t')),
        KeyCode::Backspace => Some(PromptKey::Backspace),
        KeyCode::Enter => Some(PromptKey::Submit),
        KeyCode::Esc => Some(PromptKey::Cancel),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_browse_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(translate_browse(press(KeyCode::Char('/'), none)), Some(Action::StartSearch));
        assert_eq!(translate_browse(press(KeyCode::Char('n'), none)), Some(Action::NextMatch));
        assert_eq!(
            translate_browse(press(KeyCode::Char('N'), KeyModifiers::SHIFT)),
            Some(Action::PrevMatch)
        );
        assert_eq!(translate_browse(press(KeyCode::Char('l'), none)), Some(Action::ToggleLineNumbers));
        assert_eq!(translate_browse(press(KeyCode::Char('+'), none)), Some(Action::TextSizeUp));
        assert_eq!(translate_browse(press(KeyCode::PageDown, none)), Some(Action::PageDown));
        assert_eq!(translate_browse(press(KeyCode::Char('x'), none)), None);
    }

    #[test]
    fn test_browse_control_keys() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(translate_browse(press(KeyCode::Char('c'), ctrl)), Some(Action::Quit));
        assert_eq!(translate_browse(press(KeyCode::Char('l'), ctrl)), Some(Action::Redraw));
        // Plain 'l' and C-l are different actions
        assert_ne!(
            translate_browse(press(KeyCode::Char('l'), ctrl)),
            Some(Action::ToggleLineNumbers)
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let event = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate_browse(event), None);
        assert_eq!(translate_prompt(event), None);
    }

    #[test]
    fn test_prompt_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(translate_prompt(press(KeyCode::Char('q'), none)), Some(PromptKey::Insert('q')));
        assert_eq!(translate_prompt(press(KeyCode::Enter, none)), Some(PromptKey::Submit));
        assert_eq!(translate_prompt(press(KeyCode::Esc, none)), Some(PromptKey::Cancel));
        assert_eq!(translate_prompt(press(KeyCode::Backspace, none)), Some(PromptKey::Backspace));
        assert_eq!(
            translate_prompt(press(KeyCode::Char('g'), KeyModifiers::CONTROL)),
            Some(PromptKey::Cancel)
        );
    }
}
