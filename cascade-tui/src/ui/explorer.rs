//! Explorer dialog - four linked panes inside a modal frame.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear};

use crate::app::{AppState, Pane};
use crate::panels::{CatalogListPanel, DetailPanel, SchemaListPanel, TableListPanel};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .title(" Explorer [Esc]close [?]help ")
        .title_style(theme.heading())
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26),
            Constraint::Length(28),
            Constraint::Length(34),
            Constraint::Min(24),
        ])
        .split(inner);

    let dialog = &app.dialog;
    let selection = &dialog.selection;
    let view = app.view();
    let detail = app.detail();

    f.render_widget(
        CatalogListPanel::new(
            view.catalogs,
            selection.catalog(),
            dialog.cursors.catalog,
            dialog.focus == Pane::Catalogs,
            theme,
        ),
        columns[0],
    );
    f.render_widget(
        SchemaListPanel::new(
            &view.schemas,
            selection.schema(),
            selection.filter(),
            dialog.filter_editing,
            dialog.cursors.schema,
            dialog.focus == Pane::Schemas,
            theme,
        ),
        columns[1],
    );
    f.render_widget(
        TableListPanel::new(
            view.tables,
            selection.table(),
            dialog.cursors.table,
            dialog.focus == Pane::Tables,
            theme,
        ),
        columns[2],
    );
    f.render_widget(
        DetailPanel::new(
            &detail,
            dialog.cursors.column_scroll,
            dialog.focus == Pane::Detail,
            theme,
        ),
        columns[3],
    );
}
