//! Property tests: arbitrary key sequences keep the dialog consistent.

use crossterm::event::{KeyCode, KeyEvent};
use proptest::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use cascade_core::Fixture;
use cascade_tui::config::DialogConfig;
use cascade_tui::{handle_key, ui, AppState};

fn arb_key() -> impl Strategy<Value = KeyCode> {
    prop::sample::select(vec![
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Tab,
        KeyCode::BackTab,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::Backspace,
        KeyCode::Char('o'),
        KeyCode::Char('j'),
        KeyCode::Char('k'),
        KeyCode::Char('/'),
        KeyCode::Char('s'),
        KeyCode::Char('i'),
        KeyCode::Char('?'),
        KeyCode::Char('l'),
        KeyCode::Char('a'),
        KeyCode::Char('R'),
        KeyCode::Char(' '),
    ])
}

proptest! {
    #[test]
    fn selection_stays_cascaded(
        keys in prop::collection::vec(arb_key(), 0..60),
        reset_on_close in any::<bool>(),
    ) {
        let config = DialogConfig { open_on_start: false, reset_on_close };
        let mut app = AppState::new(Fixture::builtin(), &config);
        let mut terminal = Terminal::new(TestBackend::new(160, 40)).unwrap();

        for code in keys {
            handle_key(&mut app, KeyEvent::from(code));
            if !app.running {
                break;
            }

            let sel = &app.dialog.selection;
            if sel.table().is_some() {
                prop_assert!(sel.schema().is_some());
            }
            if sel.schema().is_some() {
                prop_assert!(sel.catalog().is_some());
            }

            let view = app.view();
            prop_assert!(app.dialog.cursors.catalog < view.catalogs.len());
            prop_assert_eq!(view.catalog.map(|c| c.name.as_str()), sel.catalog());
            prop_assert_eq!(view.schema.map(|s| s.name.as_str()), sel.schema());
            prop_assert_eq!(view.table.map(|t| t.name.as_str()), sel.table());

            terminal.draw(|f| ui::draw(f, &app)).unwrap();
        }
    }

    #[test]
    fn closed_dialog_with_reset_is_always_fresh(
        keys in prop::collection::vec(arb_key(), 0..40),
    ) {
        let config = DialogConfig { open_on_start: true, reset_on_close: true };
        let mut app = AppState::new(Fixture::builtin(), &config);

        for code in keys {
            let was_open = app.open;
            handle_key(&mut app, KeyEvent::from(code));
            if !app.running {
                break;
            }
            if was_open && !app.open {
                prop_assert!(app.dialog.selection.catalog().is_none());
                prop_assert!(app.dialog.selection.filter().is_empty());
            }
        }
    }
}
