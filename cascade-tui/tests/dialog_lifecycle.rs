use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use cascade_core::{Fixture, SelectionStage};
use cascade_tui::config::DialogConfig;
use cascade_tui::{handle_key, ui, AppState};

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::from(code));
}

fn screen(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        out.push('\n');
    }
    out
}

fn drill_to_daily_summary(app: &mut AppState) {
    press(app, KeyCode::Char('o'));
    press(app, KeyCode::Char('j')); // analytics
    press(app, KeyCode::Enter);
    press(app, KeyCode::Enter); // reports
    press(app, KeyCode::Enter); // daily_summary
}

#[test]
fn reopen_preserves_state_by_default() {
    let mut app = AppState::new(Fixture::builtin(), &DialogConfig::default());
    drill_to_daily_summary(&mut app);
    assert_eq!(app.dialog.selection.table(), Some("daily_summary"));

    press(&mut app, KeyCode::Esc);
    assert!(!app.open);
    assert!(!screen(&app).contains("analytics_team"));

    press(&mut app, KeyCode::Enter);
    assert!(app.open);
    assert_eq!(app.dialog.selection.stage(), SelectionStage::TableSelected);
    assert!(screen(&app).contains("Owner: analytics_team"));
}

#[test]
fn reopen_starts_fresh_when_reset_on_close() {
    let config = DialogConfig {
        open_on_start: false,
        reset_on_close: true,
    };
    let mut app = AppState::new(Fixture::builtin(), &config);
    drill_to_daily_summary(&mut app);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.dialog.selection.stage(), SelectionStage::NoneSelected);
    assert!(screen(&app).contains("Select a table to view details"));
}

#[test]
fn scenario_renders_filtered_schemas_and_view_detail() {
    let config = DialogConfig {
        open_on_start: true,
        reset_on_close: false,
    };
    let mut app = AppState::new(Fixture::builtin(), &config);
    press(&mut app, KeyCode::Enter); // main
    press(&mut app, KeyCode::Char('/'));
    for c in "SILVER".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);

    let text = screen(&app);
    assert!(text.contains("silver_inventory"));
    assert!(!text.contains("gold_sales"));

    press(&mut app, KeyCode::Enter); // silver_inventory
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter); // inventory_history

    let text = screen(&app);
    assert!(text.contains("inventory_history"));
    assert!(text.contains("ss://data-lake/main/silver_inventory/inventory_history"));
    for col in ["history_id", "item_id", "change_date"] {
        assert!(text.contains(col), "missing column {col}");
    }
}
