//! Overlay widgets - key help and the inspection hand-off text.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Key reference for the dialog.
pub fn render_help(f: &mut Frame, area: Rect, theme: &Theme) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(" Keys [Esc]close ")
        .title_style(theme.title(true));

    let mut lines: Vec<Line> = Vec::new();
    section(&mut lines, theme, "Panes");
    key(&mut lines, theme, "Tab / Shift+Tab", "Next / previous pane");
    key(&mut lines, theme, "h / l", "Previous / next pane");
    key(&mut lines, theme, "1-4", "Focus pane by number");
    key(&mut lines, theme, "j / k", "Move cursor (scroll columns in Details)");
    key(&mut lines, theme, "Enter / Space", "Select catalog, schema or table");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Schemas");
    key(&mut lines, theme, "/", "Filter schemas (case-insensitive)");
    key(&mut lines, theme, "Ctrl+U", "Clear the filter while typing");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Table");
    key(&mut lines, theme, "s", "Sample Data");
    key(&mut lines, theme, "i", "Show inspection hand-off text");
    lines.push(Line::from(""));

    section(&mut lines, theme, "Dialog");
    key(&mut lines, theme, "Esc", "Close explorer");
    key(&mut lines, theme, "q / Ctrl+C", "Quit");

    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, popup);
}

/// Hand-off text for the selected table.
pub fn render_inspect(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(70, 50, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(" Inspect [Esc]close ")
        .title_style(theme.title(true));

    let lines: Vec<Line> = match app.inspection_context() {
        Some(ctx) => ctx
            .to_string()
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), theme.heading())))
            .collect(),
        None => vec![Line::from(Span::styled(
            "Select a table to inspect.",
            theme.placeholder(),
        ))],
    };

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.title(true))));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme.border(true)),
        Span::styled(desc.to_string(), theme.muted()),
    ]));
}
