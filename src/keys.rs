use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a terminal event asks the picker to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Up,
    Down,
    Toggle,
    Confirm,
    SelectAll,
    ClearAll,
    Resize { width: u16, height: u16 },
    None,
}

pub fn action_for(event: &Event) -> Action {
    match event {
        Event::Key(k) if k.kind == KeyEventKind::Press => action_for_key(k),
        Event::Resize(width, height) => Action::Resize { width: *width, height: *height },
        _ => Action::None,
    }
}

fn action_for_key(k: &KeyEvent) -> Action {
    let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
    match k.code {
        KeyCode::Char('c' | 'C') if ctrl => Action::Quit,
        KeyCode::Char('d' | 'D') if ctrl => Action::SelectAll,
        KeyCode::Char('a' | 'A') if ctrl => Action::ClearAll,
        _ if ctrl => Action::None,
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Char(' ') => Action::Toggle,
        KeyCode::Enter => Action::Confirm,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(action_for(&key(KeyCode::Up)), Action::Up);
        assert_eq!(action_for(&key(KeyCode::Char('k'))), Action::Up);
        assert_eq!(action_for(&key(KeyCode::Down)), Action::Down);
        assert_eq!(action_for(&key(KeyCode::Char('j'))), Action::Down);
    }

    #[test]
    fn selection_and_exit_keys() {
        assert_eq!(action_for(&key(KeyCode::Char(' '))), Action::Toggle);
        assert_eq!(action_for(&key(KeyCode::Enter)), Action::Confirm);
        assert_eq!(action_for(&key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(action_for(&ctrl('c')), Action::Quit);
        assert_eq!(action_for(&ctrl('d')), Action::SelectAll);
        assert_eq!(action_for(&ctrl('a')), Action::ClearAll);
    }

    #[test]
    fn other_keys_and_releases_do_nothing() {
        assert_eq!(action_for(&key(KeyCode::Char('x'))), Action::None);
        assert_eq!(action_for(&key(KeyCode::Esc)), Action::None);
        assert_eq!(action_for(&ctrl('j')), Action::None);
        let release = Event::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));
        assert_eq!(action_for(&release), Action::None);
        assert_eq!(action_for(&Event::FocusGained), Action::None);
    }

    #[test]
    fn resize_carries_dimensions() {
        assert_eq!(
            action_for(&Event::Resize(100, 30)),
            Action::Resize { width: 100, height: 30 }
        );
    }
}
