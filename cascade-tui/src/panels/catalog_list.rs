//! Catalog pane - every catalog in fixture order

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cascade_core::Catalog;

use super::{pane_block, visible_window};
use crate::app::Pane;
use crate::theme::Theme;

pub struct CatalogListPanel<'a> {
    catalogs: &'a [Catalog],
    selected: Option<&'a str>,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CatalogListPanel<'a> {
    pub fn new(
        catalogs: &'a [Catalog],
        selected: Option<&'a str>,
        cursor: usize,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            catalogs,
            selected,
            cursor,
            focused,
            theme,
        }
    }
}

impl<'a> Widget for CatalogListPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = pane_block(Pane::Catalogs, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let window = visible_window(self.cursor, self.catalogs.len(), inner.height as usize);
        let lines: Vec<Line> = self.catalogs[window.clone()]
            .iter()
            .zip(window)
            .map(|(catalog, row)| {
                let selected = self.selected == Some(catalog.name.as_str());
                let style = self.theme.list_row(selected, row == self.cursor, self.focused);
                Line::from(vec![
                    Span::styled("▤ ", self.theme.muted()),
                    Span::styled(catalog.name.as_str(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
