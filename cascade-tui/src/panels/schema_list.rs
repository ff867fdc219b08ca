//! Schema pane - filter input above the schemas of the selected catalog

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use cascade_core::detail::NO_SCHEMAS;
use cascade_core::Schema;

use super::{pane_block, visible_window};
use crate::app::Pane;
use crate::theme::Theme;

const FILTER_PLACEHOLDER: &str = "Filter schemas...";

pub struct SchemaListPanel<'a> {
    schemas: &'a [&'a Schema],
    selected: Option<&'a str>,
    filter: &'a str,
    editing: bool,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SchemaListPanel<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        schemas: &'a [&'a Schema],
        selected: Option<&'a str>,
        filter: &'a str,
        editing: bool,
        cursor: usize,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            schemas,
            selected,
            filter,
            editing,
            cursor,
            focused,
            theme,
        }
    }

    fn filter_line(&self) -> Line<'a> {
        let mut spans = vec![Span::styled("/ ", self.theme.muted())];
        if self.filter.is_empty() && !self.editing {
            spans.push(Span::styled(FILTER_PLACEHOLDER, self.theme.placeholder()));
        } else {
            spans.push(Span::styled(self.filter, self.theme.heading()));
        }
        if self.editing {
            spans.push(Span::styled("_", self.theme.border(true)));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for SchemaListPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = pane_block(Pane::Schemas, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        Paragraph::new(self.filter_line()).render(chunks[0], buf);

        if self.schemas.is_empty() {
            Paragraph::new(Span::styled(NO_SCHEMAS, self.theme.placeholder()))
                .render(chunks[1], buf);
            return;
        }

        let window = visible_window(self.cursor, self.schemas.len(), chunks[1].height as usize);
        let lines: Vec<Line> = self.schemas[window.clone()]
            .iter()
            .zip(window)
            .map(|(schema, row)| {
                let selected = self.selected == Some(schema.name.as_str());
                let style = self.theme.list_row(selected, row == self.cursor, self.focused);
                Line::from(Span::styled(schema.name.as_str(), style))
            })
            .collect();

        Paragraph::new(lines).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::buffer_text;
    use cascade_core::{visible_schemas, Fixture};

    fn render(schemas: &[&Schema], filter: &str, editing: bool) -> String {
        let theme = Theme::default();
        let panel = SchemaListPanel::new(schemas, None, filter, editing, 0, true, &theme);
        let area = Rect::new(0, 0, 28, 8);
        let mut buf = Buffer::empty(area);
        panel.render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn shows_placeholder_filter_and_schemas() {
        let fixture = Fixture::builtin();
        let schemas = visible_schemas(fixture.catalogs.first(), "");
        let text = render(&schemas, "", false);
        assert!(text.contains(FILTER_PLACEHOLDER));
        assert!(text.contains("gold_sales"));
        assert!(text.contains("silver_inventory"));
    }

    #[test]
    fn shows_filter_text_while_editing() {
        let fixture = Fixture::builtin();
        let schemas = visible_schemas(fixture.catalogs.first(), "silv");
        let text = render(&schemas, "silv", true);
        assert!(text.contains("/ silv_"));
        assert!(!text.contains("gold_sales"));
    }

    #[test]
    fn empty_result_shows_message() {
        let text = render(&[], "zzz", false);
        assert!(text.contains(NO_SCHEMAS));
    }
}
