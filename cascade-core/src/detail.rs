//! Detail view model for the selected table.
//!
//! Either a four-part layout (title, metadata lines, inert action, column
//! rows) or a single placeholder line when nothing is resolved.

use serde::Serialize;

use crate::model::{Table, TableKind};

pub const DETAIL_PLACEHOLDER: &str = "Select a table to view details";
pub const SAMPLE_DATA_LABEL: &str = "Sample Data";
pub const NO_SCHEMAS: &str = "No schemas found";
pub const NO_TABLES: &str = "No tables available";

/// One row of the column list: name plus its type badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnRow {
    pub name: String,
    pub type_label: String,
}

/// Resolved table detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDetail {
    pub title: String,
    pub kind: TableKind,
    pub owner: String,
    pub storage: String,
    /// Label of the placeholder action. Pressing it does nothing.
    pub action: &'static str,
    pub columns: Vec<ColumnRow>,
}

impl TableDetail {
    /// `Owner: ...` and `Storage: ...` lines.
    pub fn metadata_lines(&self) -> [String; 2] {
        [
            format!("Owner: {}", self.owner),
            format!("Storage: {}", self.storage),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailView {
    Placeholder { message: &'static str },
    Table(TableDetail),
}

impl DetailView {
    pub fn from_table(table: Option<&Table>) -> Self {
        match table {
            None => DetailView::Placeholder {
                message: DETAIL_PLACEHOLDER,
            },
            Some(t) => DetailView::Table(TableDetail {
                title: t.name.clone(),
                kind: t.kind,
                owner: t.owner.clone(),
                storage: t.storage.clone(),
                action: SAMPLE_DATA_LABEL,
                columns: t
                    .columns
                    .iter()
                    .map(|c| ColumnRow {
                        name: c.name.clone(),
                        type_label: c.data_type.clone(),
                    })
                    .collect(),
            }),
        }
    }

    pub fn table(&self) -> Option<&TableDetail> {
        match self {
            DetailView::Table(detail) => Some(detail),
            DetailView::Placeholder { .. } => None,
        }
    }

    /// Plain-text rendering, one line per element.
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            DetailView::Placeholder { message } => vec![(*message).to_string()],
            DetailView::Table(d) => {
                let [owner, storage] = d.metadata_lines();
                let mut lines = vec![
                    format!("{} ({})", d.title, d.kind.label()),
                    owner,
                    storage,
                    format!("[{}]", d.action),
                    "Columns".to_string(),
                ];
                let width = d.columns.iter().map(|c| c.name.len()).max().unwrap_or(0);
                for c in &d.columns {
                    lines.push(format!("  {:<width$}  {}", c.name, c.type_label));
                }
                lines
            }
        }
    }
}
