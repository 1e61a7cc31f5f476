use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Move one step back on the track
    Previous,
    /// Move one step forward on the track
    Next,
    JumpToFirst,
    JumpToLast,
    /// Jump straight to an indicator dot
    JumpToDot(usize),
    /// A drag started at this column/row
    DragStart(u16, u16),
    /// A drag ended at this column/row
    DragEnd(u16, u16),
    ToggleHelp,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Any key closes the help overlay
    if app.show_help {
        return Action::ToggleHelp;
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Track navigation
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::Next,
        (KeyCode::Left, KeyModifiers::NONE) => Action::Previous,
        (KeyCode::Right, KeyModifiers::NONE) => Action::Next,

        // Jump to the ends of the track
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToFirst,
        (KeyCode::Home, KeyModifiers::NONE) => Action::JumpToFirst,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToLast,
        (KeyCode::End, KeyModifiers::NONE) => Action::JumpToLast,

        // Jump to a dot by number
        (KeyCode::Char(c), KeyModifiers::NONE) if c.is_ascii_digit() && c != '0' => {
            Action::JumpToDot(c as usize - '1' as usize)
        }

        // Help
        (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::ToggleHelp,

        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Action::DragStart(mouse.column, mouse.row),
        MouseEventKind::Up(MouseButton::Left) => Action::DragEnd(mouse.column, mouse.row),
        MouseEventKind::ScrollLeft => Action::Previous,
        MouseEventKind::ScrollRight => Action::Next,
        _ => Action::None,
    }
}
