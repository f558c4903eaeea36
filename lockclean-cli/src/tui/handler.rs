use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, Phase};

/// Map key events to actions based on current phase
pub fn handle_key(key: KeyEvent, phase: Phase) -> Action {
    if is_ctrl_c(&key) {
        return Action::Quit;
    }

    match phase {
        Phase::Input | Phase::Error => handle_key_input(key),
        Phase::Searching => handle_key_busy(key),
        Phase::Confirm => handle_key_confirm(key),
        Phase::Deleting => match handle_key_busy(key) {
            Action::None => handle_key_scroll(key),
            action => action,
        },
        Phase::Summary | Phase::Quit => handle_key_done(key),
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Folder prompt: printable keys are text, so only Esc quits
fn handle_key_input(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Backspace => Action::DeleteBackward,
        KeyCode::Delete => Action::DeleteForward,
        KeyCode::Left => Action::CursorLeft,
        KeyCode::Right => Action::CursorRight,
        KeyCode::Home => Action::CursorHome,
        KeyCode::End => Action::CursorEnd,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::InsertChar(c)
        }
        _ => Action::None,
    }
}

fn handle_key_busy(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        _ => Action::None,
    }
}

fn handle_key_confirm(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,

        // Selection
        KeyCode::Left | KeyCode::Char('h') => Action::SelectProceed,
        KeyCode::Right | KeyCode::Char('l') => Action::SelectCancel,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Char(' ') => Action::ToggleSelection,
        KeyCode::Enter => Action::Confirm,

        _ => handle_key_scroll(key),
    }
}

fn handle_key_done(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Enter | KeyCode::Esc => Action::Quit,
        _ => handle_key_scroll(key),
    }
}

fn handle_key_scroll(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => Action::ScrollDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        for phase in [
            Phase::Input,
            Phase::Error,
            Phase::Searching,
            Phase::Confirm,
            Phase::Deleting,
            Phase::Summary,
            Phase::Quit,
        ] {
            assert_eq!(handle_key(ctrl('c'), phase), Action::Quit);
        }
    }

    #[test]
    fn test_q_is_text_in_prompt() {
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), Phase::Input),
            Action::InsertChar('q')
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('q')), Phase::Confirm),
            Action::Quit
        );
        assert_eq!(handle_key(ctrl('a'), Phase::Error), Action::None);
    }

    #[test]
    fn test_confirm_keys() {
        assert_eq!(
            handle_key(key(KeyCode::Left), Phase::Confirm),
            Action::SelectProceed
        );
        assert_eq!(
            handle_key(key(KeyCode::Char('l')), Phase::Confirm),
            Action::SelectCancel
        );
        assert_eq!(
            handle_key(key(KeyCode::Tab), Phase::Confirm),
            Action::ToggleSelection
        );
        assert_eq!(
            handle_key(key(KeyCode::Enter), Phase::Confirm),
            Action::Confirm
        );
        assert_eq!(
            handle_key(key(KeyCode::Down), Phase::Confirm),
            Action::ScrollDown
        );
    }

    #[test]
    fn test_enter_only_quits_when_done() {
        assert_eq!(
            handle_key(key(KeyCode::Enter), Phase::Searching),
            Action::None
        );
        assert_eq!(
            handle_key(key(KeyCode::Enter), Phase::Deleting),
            Action::None
        );
        assert_eq!(handle_key(key(KeyCode::Enter), Phase::Summary), Action::Quit);
        assert_eq!(
            handle_key(key(KeyCode::PageUp), Phase::Deleting),
            Action::PageUp
        );
    }
}
