//! Cascading selection state machine.
//!
//! `NoneSelected → CatalogSelected → SchemaSelected → TableSelected`.
//! Selecting at one level clears every level below it. The schema filter is
//! independent of the selection and never clears anything.

use serde::{Deserialize, Serialize};

use crate::derive::{catalog_data, schema_data, table_data};
use crate::fixture::Fixture;

/// How deep the current selection reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SelectionStage {
    NoneSelected,
    CatalogSelected,
    SchemaSelected,
    TableSelected,
}

/// Selected names plus the schema filter text.
///
/// Invariant: `schema` is only set while `catalog` is set and names one of
/// its schemas; `table` likewise names a table of the selected schema. The
/// transitions check membership against the fixture they are given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    catalog: Option<String>,
    schema: Option<String>,
    table: Option<String>,
    filter: String,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Option<&str> {
        self.catalog.as_deref()
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn stage(&self) -> SelectionStage {
        match (&self.catalog, &self.schema, &self.table) {
            (None, _, _) => SelectionStage::NoneSelected,
            (Some(_), None, _) => SelectionStage::CatalogSelected,
            (Some(_), Some(_), None) => SelectionStage::SchemaSelected,
            (Some(_), Some(_), Some(_)) => SelectionStage::TableSelected,
        }
    }

    /// Select a catalog of `fixture`; clears schema and table, even when the
    /// same catalog is selected again.
    ///
    /// Ignored (returns `false`) when the fixture has no such catalog.
    pub fn select_catalog(&mut self, fixture: &Fixture, name: &str) -> bool {
        if catalog_data(fixture, Some(name)).is_none() {
            tracing::debug!(catalog = name, "unknown catalog ignored");
            return false;
        }
        tracing::debug!(catalog = name, "select catalog");
        self.catalog = Some(name.to_string());
        self.schema = None;
        self.table = None;
        true
    }

    /// Select a schema of the current catalog and clear the table.
    ///
    /// Ignored (returns `false`) when no catalog is selected or the catalog
    /// has no such schema.
    pub fn select_schema(&mut self, fixture: &Fixture, name: &str) -> bool {
        let catalog = catalog_data(fixture, self.catalog());
        if schema_data(catalog, Some(name)).is_none() {
            tracing::debug!(schema = name, catalog = ?self.catalog, "schema not in catalog");
            return false;
        }
        tracing::debug!(schema = name, "select schema");
        self.schema = Some(name.to_string());
        self.table = None;
        true
    }

    /// Select a table of the current schema.
    ///
    /// Ignored (returns `false`) when no schema is selected or the schema has
    /// no such table.
    pub fn select_table(&mut self, fixture: &Fixture, name: &str) -> bool {
        let schema = schema_data(catalog_data(fixture, self.catalog()), self.schema());
        if table_data(schema, Some(name)).is_none() {
            tracing::debug!(table = name, schema = ?self.schema, "table not in schema");
            return false;
        }
        tracing::debug!(table = name, "select table");
        self.table = Some(name.to_string());
        true
    }

    /// Replace the schema filter text. Selections are untouched.
    pub fn set_schema_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
    }

    /// Back to `NoneSelected` with an empty filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
