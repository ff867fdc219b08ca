//! Derivation pipeline - pure lookups from (fixture, selection) to what the
//! explorer shows. Every step yields the empty result when its parent is
//! absent, and every list keeps fixture order.

use crate::fixture::Fixture;
use crate::model::{Catalog, Schema, Table};
use crate::selection::Selection;

/// The catalog record for `name`, if both are present.
pub fn catalog_data<'a>(fixture: &'a Fixture, name: Option<&str>) -> Option<&'a Catalog> {
    let name = name?;
    fixture.catalogs.iter().find(|c| c.name == name)
}

/// Schemas of the catalog whose name contains `filter`, case-insensitively.
///
/// A blank filter (empty or whitespace only) shows every schema. A non-blank
/// filter is matched as typed, surrounding whitespace included.
pub fn visible_schemas<'a>(catalog: Option<&'a Catalog>, filter: &str) -> Vec<&'a Schema> {
    let Some(catalog) = catalog else {
        return Vec::new();
    };
    if filter.trim().is_empty() {
        return catalog.schemas.iter().collect();
    }
    let needle = filter.to_lowercase();
    catalog
        .schemas
        .iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect()
}

/// The schema record for `name` within the catalog. Looks at every schema of
/// the catalog, not only the ones passing the filter.
pub fn schema_data<'a>(catalog: Option<&'a Catalog>, name: Option<&str>) -> Option<&'a Schema> {
    let name = name?;
    catalog?.schemas.iter().find(|s| s.name == name)
}

/// The table record for `name` within the schema.
pub fn table_data<'a>(schema: Option<&'a Schema>, name: Option<&str>) -> Option<&'a Table> {
    let name = name?;
    schema?.tables.iter().find(|t| t.name == name)
}

/// Tables and views of the schema, or nothing.
pub fn visible_tables(schema: Option<&Schema>) -> &[Table] {
    schema.map(|s| s.tables.as_slice()).unwrap_or(&[])
}

/// Everything one render pass needs, derived in one go.
#[derive(Debug, Clone)]
pub struct ExplorerView<'a> {
    pub catalogs: &'a [Catalog],
    pub catalog: Option<&'a Catalog>,
    pub schemas: Vec<&'a Schema>,
    pub schema: Option<&'a Schema>,
    pub tables: &'a [Table],
    pub table: Option<&'a Table>,
}

impl<'a> ExplorerView<'a> {
    pub fn derive(fixture: &'a Fixture, selection: &Selection) -> Self {
        let catalog = catalog_data(fixture, selection.catalog());
        let schemas = visible_schemas(catalog, selection.filter());
        let schema = schema_data(catalog, selection.schema());
        let tables = visible_tables(schema);
        let table = table_data(schema, selection.table());
        Self {
            catalogs: &fixture.catalogs,
            catalog,
            schemas,
            schema,
            tables,
            table,
        }
    }

    pub fn schema_names(&self) -> Vec<&'a str> {
        self.schemas.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn table_names(&self) -> Vec<&'a str> {
        self.tables.iter().map(|t| t.name.as_str()).collect()
    }
}
