//! Dialog panes
//!
//! Left to right:
//! - CatalogList: every catalog of the fixture
//! - SchemaList: filter input plus the filtered schemas of the catalog
//! - TableList: tables and views of the selected schema
//! - Detail: owner, storage, Sample Data action and the column list

pub mod catalog_list;
pub mod detail;
pub mod schema_list;
pub mod table_list;

pub use catalog_list::CatalogListPanel;
pub use detail::DetailPanel;
pub use schema_list::SchemaListPanel;
pub use table_list::TableListPanel;

use std::ops::Range;

use ratatui::widgets::{Block, Borders};

use crate::app::Pane;
use crate::theme::Theme;

/// Bordered pane block titled with the pane's label and focus key.
pub(crate) fn pane_block(pane: Pane, focused: bool, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(format!(" {} [{}] ", pane.label(), pane.index() + 1))
        .borders(Borders::ALL)
        .border_style(theme.border(focused))
        .title_style(theme.title(focused))
}

/// Rows to draw so the cursor stays on screen.
pub(crate) fn visible_window(cursor: usize, len: usize, height: usize) -> Range<usize> {
    if height == 0 || len == 0 {
        return 0..0;
    }
    let start = (cursor + 1).saturating_sub(height).min(len.saturating_sub(1));
    start..(start + height).min(len)
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            content.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
        }
        content.push('\n');
    }
    content
}
