//! Keyboard input dispatch - global keys → host screen or dialog → overlays →
//! filter editing → pane keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Pane};

/// Requests the dialog sends up to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    OpenChange(bool),
}

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    if !app.open {
        handle_host_key(app, key);
        return;
    }

    if let Some(DialogEvent::OpenChange(open)) = handle_dialog_key(app, key) {
        app.on_open_change(open);
    }
}

fn handle_host_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('o') => app.on_open_change(true),
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        _ => {}
    }
}

/// Dialog keys. Returns an event when the dialog wants the host to change
/// its visibility.
pub fn handle_dialog_key(app: &mut AppState, key: KeyEvent) -> Option<DialogEvent> {
    // 1. Overlays consume input first.
    if app.overlay != Overlay::None {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Char('i')
        ) {
            app.overlay = Overlay::None;
        }
        return None;
    }

    // 2. Filter input takes every printable key while active.
    if app.dialog.filter_editing {
        handle_filter_key(app, key);
        return None;
    }

    // 3. Dialog-wide keys.
    match key.code {
        KeyCode::Esc => return Some(DialogEvent::OpenChange(false)),
        KeyCode::Char('q') => {
            app.running = false;
            return None;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return None;
        }
        KeyCode::Char('/') => {
            app.dialog.focus = Pane::Schemas;
            app.dialog.filter_editing = true;
            return None;
        }
        KeyCode::Char('s') => {
            app.press_sample_data();
            return None;
        }
        KeyCode::Char('i') => {
            if app.view().table.is_some() {
                app.overlay = Overlay::Inspect;
            } else {
                app.set_warning("Select a table to inspect");
            }
            return None;
        }
        KeyCode::BackTab => {
            app.dialog.focus = app.dialog.focus.prev();
            return None;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.dialog.focus = app.dialog.focus.prev();
            } else {
                app.dialog.focus = app.dialog.focus.next();
            }
            return None;
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.dialog.focus = app.dialog.focus.next();
            return None;
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.dialog.focus = app.dialog.focus.prev();
            return None;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            if let Some(pane) = Pane::from_index(index) {
                app.dialog.focus = pane;
            }
            return None;
        }
        _ => {}
    }

    // 4. Pane keys.
    let fixture = &app.fixture;
    let dialog = &mut app.dialog;
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => dialog.move_cursor(fixture, 1),
        KeyCode::Char('k') | KeyCode::Up => dialog.move_cursor(fixture, -1),
        KeyCode::PageDown => dialog.move_cursor(fixture, 10),
        KeyCode::PageUp => dialog.move_cursor(fixture, -10),
        KeyCode::Enter | KeyCode::Char(' ') => {
            // Selecting moves focus one pane to the right.
            if dialog.activate(fixture).is_some() && dialog.focus != Pane::Tables {
                dialog.focus = dialog.focus.next();
            }
        }
        _ => {}
    }
    None
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    let fixture = &app.fixture;
    let dialog = &mut app.dialog;
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab => {
            dialog.filter_editing = false;
        }
        KeyCode::Backspace => dialog.pop_filter_char(fixture),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            dialog.set_filter(fixture, String::new());
        }
        KeyCode::Char(c) => dialog.push_filter_char(fixture, c),
        _ => {}
    }
}
