//! Top-level UI layout - host screen, explorer dialog, status bar, overlays.

pub mod explorer;
pub mod host;
pub mod overlays;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{AppState, Overlay};
use crate::theme::Theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = Theme::default();

    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    host::render(f, main_area, app, &theme);

    if app.open {
        let dialog_area = centered_rect(90, 85, main_area);
        explorer::render(f, dialog_area, app, &theme);

        match app.overlay {
            Overlay::Help => overlays::render_help(f, dialog_area, &theme),
            Overlay::Inspect => overlays::render_inspect(f, dialog_area, app, &theme),
            Overlay::None => {}
        }
    }

    status_bar::render(f, status_area, app, &theme);
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
