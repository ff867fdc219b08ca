//! Bottom status bar - key hints for the current context and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme::Theme;

fn hints(app: &AppState) -> &'static str {
    if !app.open {
        " Enter:open q:quit"
    } else if app.dialog.filter_editing {
        " type to filter  Enter/Esc:done  Ctrl+U:clear"
    } else {
        " Tab/1-4:pane j/k:move Enter:select /:filter s:sample i:inspect Esc:close"
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(hints(app), theme.muted()));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), theme.status(*level)));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}
