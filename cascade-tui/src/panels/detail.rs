//! Detail pane - table header, Sample Data action and column list
//!
//! Renders a `DetailView`: either the four-part layout for a resolved table
//! or one centered placeholder line.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cascade_core::{DetailView, TableDetail};

use super::{pane_block, visible_window};
use crate::app::Pane;
use crate::theme::Theme;

pub struct DetailPanel<'a> {
    view: &'a DetailView,
    column_scroll: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> DetailPanel<'a> {
    pub fn new(view: &'a DetailView, column_scroll: usize, focused: bool, theme: &'a Theme) -> Self {
        Self {
            view,
            column_scroll,
            focused,
            theme,
        }
    }

    fn header_lines(&self, detail: &'a TableDetail) -> Vec<Line<'a>> {
        let [owner, storage] = detail.metadata_lines();
        vec![
            Line::from(vec![
                Span::styled(detail.title.as_str(), self.theme.heading()),
                Span::styled(format!("  {}", detail.kind.label()), self.theme.muted()),
            ]),
            Line::from(Span::styled(owner, self.theme.muted())),
            Line::from(Span::styled(storage, self.theme.muted())),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!(" {} ", detail.action), self.theme.button()),
                Span::styled("  [s]", self.theme.muted()),
            ]),
            Line::from(""),
            Line::from(Span::styled("Columns", self.theme.heading())),
        ]
    }

    fn render_columns(&self, detail: &'a TableDetail, area: Rect, buf: &mut Buffer) {
        let width = detail
            .columns
            .iter()
            .map(|c| c.name.chars().count())
            .max()
            .unwrap_or(0);
        let window = visible_window(self.column_scroll, detail.columns.len(), area.height as usize);
        let lines: Vec<Line> = detail.columns[window]
            .iter()
            .map(|c| {
                Line::from(vec![
                    Span::styled(format!("{:<width$}  ", c.name), self.theme.heading()),
                    Span::styled(format!(" {} ", c.type_label), self.theme.badge()),
                ])
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = pane_block(Pane::Detail, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let detail = match self.view {
            DetailView::Placeholder { message } => {
                let mid = inner.height / 2;
                let line_area = Rect::new(inner.x, inner.y + mid, inner.width, inner.height.min(1));
                Paragraph::new(Span::styled(*message, self.theme.placeholder()))
                    .alignment(Alignment::Center)
                    .render(line_area, buf);
                return;
            }
            DetailView::Table(detail) => detail,
        };

        let header = self.header_lines(detail);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header.len() as u16), Constraint::Min(0)])
            .split(inner);

        // Long storage paths are truncated at the pane edge, not wrapped.
        Paragraph::new(header).render(chunks[0], buf);
        self.render_columns(detail, chunks[1], buf);
    }
}
