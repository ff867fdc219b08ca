//! Application state - single-owner, main-thread only.
//!
//! The host screen owns the explorer dialog's state, so closing the dialog
//! does not lose the selection unless `reset_on_close` is set.

use cascade_core::{DetailView, ExplorerView, Fixture, InspectionContext, Selection};

use crate::config::DialogConfig;

/// Which pane of the dialog has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Catalogs,
    Schemas,
    Tables,
    Detail,
}

impl Pane {
    pub fn index(self) -> usize {
        match self {
            Pane::Catalogs => 0,
            Pane::Schemas => 1,
            Pane::Tables => 2,
            Pane::Detail => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Pane::Catalogs),
            1 => Some(Pane::Schemas),
            2 => Some(Pane::Tables),
            3 => Some(Pane::Detail),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Pane::Catalogs => "Catalogs",
            Pane::Schemas => "Schemas",
            Pane::Tables => "Tables & Views",
            Pane::Detail => "Details",
        }
    }

    pub fn next(self) -> Pane {
        match self {
            Pane::Catalogs => Pane::Schemas,
            Pane::Schemas => Pane::Tables,
            Pane::Tables => Pane::Detail,
            Pane::Detail => Pane::Catalogs,
        }
    }

    pub fn prev(self) -> Pane {
        match self {
            Pane::Catalogs => Pane::Detail,
            Pane::Schemas => Pane::Catalogs,
            Pane::Tables => Pane::Schemas,
            Pane::Detail => Pane::Tables,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
    Inspect,
}

/// Cursor rows for the three list panes plus the column list scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursors {
    pub catalog: usize,
    pub schema: usize,
    pub table: usize,
    pub column_scroll: usize,
}

/// Explorer dialog state.
#[derive(Debug, Clone)]
pub struct DialogState {
    pub selection: Selection,
    pub focus: Pane,
    pub cursors: Cursors,
    /// Keystrokes go to the schema filter while set.
    pub filter_editing: bool,
}

impl Default for DialogState {
    fn default() -> Self {
        Self {
            selection: Selection::new(),
            focus: Pane::Catalogs,
            cursors: Cursors::default(),
            filter_editing: false,
        }
    }
}

impl DialogState {
    /// Number of rows in the focused pane.
    fn focused_len(&self, fixture: &Fixture) -> usize {
        let view = ExplorerView::derive(fixture, &self.selection);
        match self.focus {
            Pane::Catalogs => view.catalogs.len(),
            Pane::Schemas => view.schemas.len(),
            Pane::Tables => view.tables.len(),
            Pane::Detail => view.table.map(|t| t.columns.len()).unwrap_or(0),
        }
    }

    fn focused_cursor(&mut self) -> &mut usize {
        match self.focus {
            Pane::Catalogs => &mut self.cursors.catalog,
            Pane::Schemas => &mut self.cursors.schema,
            Pane::Tables => &mut self.cursors.table,
            Pane::Detail => &mut self.cursors.column_scroll,
        }
    }

    /// Move the focused pane's cursor by `delta`, clamped to its rows.
    pub fn move_cursor(&mut self, fixture: &Fixture, delta: isize) {
        let len = self.focused_len(fixture);
        let cursor = self.focused_cursor();
        if len == 0 {
            *cursor = 0;
            return;
        }
        let target = (*cursor as isize + delta).clamp(0, len as isize - 1);
        *cursor = target as usize;
    }

    /// Select the item under the focused pane's cursor. Returns the name that
    /// was selected, if any.
    pub fn activate(&mut self, fixture: &Fixture) -> Option<String> {
        let view = ExplorerView::derive(fixture, &self.selection);
        match self.focus {
            Pane::Catalogs => {
                let name = view.catalogs.get(self.cursors.catalog)?.name.clone();
                self.select_catalog(fixture, &name).then_some(name)
            }
            Pane::Schemas => {
                let name = view.schemas.get(self.cursors.schema)?.name.clone();
                self.select_schema(fixture, &name).then_some(name)
            }
            Pane::Tables => {
                let name = view.tables.get(self.cursors.table)?.name.clone();
                self.select_table(fixture, &name).then_some(name)
            }
            Pane::Detail => None,
        }
    }

    pub fn select_catalog(&mut self, fixture: &Fixture, name: &str) -> bool {
        let accepted = self.selection.select_catalog(fixture, name);
        if accepted {
            self.cursors.schema = 0;
            self.cursors.table = 0;
            self.cursors.column_scroll = 0;
        }
        accepted
    }

    pub fn select_schema(&mut self, fixture: &Fixture, name: &str) -> bool {
        let accepted = self.selection.select_schema(fixture, name);
        if accepted {
            self.cursors.table = 0;
            self.cursors.column_scroll = 0;
        }
        accepted
    }

    pub fn select_table(&mut self, fixture: &Fixture, name: &str) -> bool {
        let accepted = self.selection.select_table(fixture, name);
        if accepted {
            self.cursors.column_scroll = 0;
        }
        accepted
    }

    /// Replace the filter text and keep the schema cursor on a visible row.
    pub fn set_filter(&mut self, fixture: &Fixture, text: String) {
        self.selection.set_schema_filter(text);
        let visible = ExplorerView::derive(fixture, &self.selection).schemas.len();
        self.cursors.schema = self.cursors.schema.min(visible.saturating_sub(1));
    }

    pub fn push_filter_char(&mut self, fixture: &Fixture, c: char) {
        let mut text = self.selection.filter().to_string();
        text.push(c);
        self.set_filter(fixture, text);
    }

    pub fn pop_filter_char(&mut self, fixture: &Fixture) {
        let mut text = self.selection.filter().to_string();
        text.pop();
        self.set_filter(fixture, text);
    }
}

/// Top-level application state: the host screen plus its dialog.
pub struct AppState {
    pub fixture: Fixture,
    pub dialog: DialogState,
    /// Dialog visibility, controlled by the host.
    pub open: bool,
    pub reset_on_close: bool,
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(fixture: Fixture, config: &DialogConfig) -> Self {
        let mut app = Self {
            fixture,
            dialog: DialogState::default(),
            open: false,
            reset_on_close: config.reset_on_close,
            running: true,
            overlay: Overlay::None,
            status_message: None,
        };
        if config.open_on_start {
            app.on_open_change(true);
        }
        app
    }

    /// Host-side handler for open/close requests from the dialog or the
    /// host screen.
    pub fn on_open_change(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        self.overlay = Overlay::None;
        self.dialog.filter_editing = false;
        if open {
            tracing::info!(stage = ?self.dialog.selection.stage(), "explorer opened");
        } else {
            tracing::info!(reset = self.reset_on_close, "explorer closed");
            if self.reset_on_close {
                self.dialog = DialogState::default();
            }
        }
    }

    pub fn view(&self) -> ExplorerView<'_> {
        ExplorerView::derive(&self.fixture, &self.dialog.selection)
    }

    pub fn detail(&self) -> DetailView {
        DetailView::from_table(self.view().table)
    }

    pub fn inspection_context(&self) -> Option<InspectionContext> {
        InspectionContext::for_table(self.view().table)
    }

    /// The inert "Sample Data" action.
    pub fn press_sample_data(&mut self) {
        let Some(table) = self.view().table.map(|t| t.name.clone()) else {
            return;
        };
        tracing::debug!(table = %table, "sample data pressed");
        self.set_status("Sample Data has no action yet");
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
