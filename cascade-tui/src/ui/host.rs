//! Host screen - the page the explorer dialog opens from.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::style::Style;

use crate::app::AppState;
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, area);

    let catalogs = app.fixture.catalogs.len();
    let tables = app.fixture.table_count();

    let text = vec![
        Line::from(Span::styled(" Open Cascade Explorer ", theme.button())),
        Line::from(""),
        Line::from(Span::styled(
            format!("{catalogs} catalogs, {tables} tables and views"),
            theme.muted(),
        )),
        Line::from(Span::styled("[Enter/o] open  [q] quit", theme.muted())),
    ];

    let top = area.y + area.height.saturating_sub(text.len() as u16) / 2;
    let centered = Rect::new(area.x, top, area.width, (text.len() as u16).min(area.height));
    let para = Paragraph::new(text).alignment(Alignment::Center);
    f.render_widget(para, centered);
}
