//! Tables & Views pane - relations of the selected schema with their kind

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cascade_core::detail::NO_TABLES;
use cascade_core::{Table, TableKind};

use super::{pane_block, visible_window};
use crate::app::Pane;
use crate::theme::Theme;

pub struct TableListPanel<'a> {
    tables: &'a [Table],
    selected: Option<&'a str>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TableListPanel<'a> {
    pub fn new(
        tables: &'a [Table],
        selected: Option<&'a str>,
        cursor: usize,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tables,
            selected,
            cursor,
            focused,
            theme,
        }
    }
}

fn kind_icon(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Table => "▦ ",
        TableKind::View => "◫ ",
    }
}

impl<'a> Widget for TableListPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = pane_block(Pane::Tables, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        if self.tables.is_empty() {
            Paragraph::new(Span::styled(NO_TABLES, self.theme.placeholder())).render(inner, buf);
            return;
        }

        let window = visible_window(self.cursor, self.tables.len(), inner.height as usize);
        let lines: Vec<Line> = self.tables[window.clone()]
            .iter()
            .zip(window)
            .map(|(table, row)| {
                let selected = self.selected == Some(table.name.as_str());
                let style = self.theme.list_row(selected, row == self.cursor, self.focused);
                Line::from(vec![
                    Span::styled(kind_icon(table.kind), self.theme.muted()),
                    Span::styled(table.name.as_str(), style),
                    Span::styled(format!("  {}", table.kind.label()), self.theme.muted()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
