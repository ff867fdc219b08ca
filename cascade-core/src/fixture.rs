//! Fixture - the read-only catalog data set the explorer browses.
//!
//! The embedded data set is built once at startup. Alternative data sets can
//! be loaded from a TOML file with the same shape:
//!
//! ```toml
//! [[catalogs]]
//! name = "main"
//!
//! [[catalogs.schemas]]
//! name = "gold_sales"
//!
//! [[catalogs.schemas.tables]]
//! name = "orders"
//! kind = "table"
//! owner = "data_team"
//! storage = "ss://data-lake/main/gold_sales/orders"
//! columns = [{ name = "order_id", type = "INT" }]
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FixtureError;
use crate::model::{Catalog, Column, Schema, Table, TableKind};

/// The complete catalog data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub catalogs: Vec<Catalog>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Fixture {
    /// Load and validate a fixture from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            catalogs = fixture.catalogs.len(),
            "loaded fixture"
        );
        Ok(fixture)
    }

    /// Parse and validate a fixture from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, FixtureError> {
        let fixture: Fixture = toml::from_str(content)?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Serialize the fixture to TOML.
    pub fn to_toml(&self) -> Result<String, FixtureError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check name uniqueness at every level of the hierarchy.
    pub fn validate(&self) -> Result<(), FixtureError> {
        let mut catalogs = HashSet::new();
        for catalog in &self.catalogs {
            if !catalogs.insert(catalog.name.as_str()) {
                return Err(FixtureError::DuplicateCatalog {
                    catalog: catalog.name.clone(),
                });
            }
            let mut schemas = HashSet::new();
            for schema in &catalog.schemas {
                if !schemas.insert(schema.name.as_str()) {
                    return Err(FixtureError::DuplicateSchema {
                        catalog: catalog.name.clone(),
                        schema: schema.name.clone(),
                    });
                }
                let mut tables = HashSet::new();
                for table in &schema.tables {
                    if !tables.insert(table.name.as_str()) {
                        return Err(FixtureError::DuplicateTable {
                            catalog: catalog.name.clone(),
                            schema: schema.name.clone(),
                            table: table.name.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Catalog names in fixture order.
    pub fn catalog_names(&self) -> Vec<&str> {
        self.catalogs.iter().map(|c| c.name.as_str()).collect()
    }

    /// Total number of tables and views across all catalogs.
    pub fn table_count(&self) -> usize {
        self.catalogs
            .iter()
            .flat_map(|c| c.schemas.iter())
            .map(|s| s.tables.len())
            .sum()
    }

    /// The embedded data set: two catalogs, three schemas, four relations.
    pub fn builtin() -> Self {
        let main = Catalog {
            name: "main".into(),
            schemas: vec![
                Schema {
                    name: "gold_sales".into(),
                    tables: vec![table(
                        "fact_sales transactions",
                        TableKind::Table,
                        "data_team",
                        "ss://data-lake/main/gold_sales/fact_sales_transactions",
                        &[
                            ("transaction_id", "INT"),
                            ("customer", "STRING"),
                            ("quantity", "INT"),
                            ("price", "DECIMAL(10,2)"),
                            ("transaction_date", "DATE"),
                        ],
                    )],
                },
                Schema {
                    name: "silver_inventory".into(),
                    tables: vec![
                        table(
                            "inventory_items",
                            TableKind::Table,
                            "data_team",
                            "ss://data-lake/main/silver_inventory/inventory_items",
                            &[
                                ("item_id", "INT"),
                                ("item_name", "STRING"),
                                ("stock_quantity", "INT"),
                            ],
                        ),
                        table(
                            "inventory_history",
                            TableKind::View,
                            "data_team",
                            "ss://data-lake/main/silver_inventory/inventory_history",
                            &[
                                ("history_id", "INT"),
                                ("item_id", "INT"),
                                ("change_date", "DATE"),
                            ],
                        ),
                    ],
                },
            ],
        };

        let analytics = Catalog {
            name: "analytics".into(),
            schemas: vec![Schema {
                name: "reports".into(),
                tables: vec![table(
                    "daily_summary",
                    TableKind::Table,
                    "analytics_team",
                    "ss://data-lake/analytics/reports/daily_summary",
                    &[
                        ("date", "DATE"),
                        ("total_revenue", "DECIMAL(12,2)"),
                        ("total_transactions", "INT"),
                    ],
                )],
            }],
        };

        Self {
            catalogs: vec![main, analytics],
        }
    }
}

fn table(
    name: &str,
    kind: TableKind,
    owner: &str,
    storage: &str,
    columns: &[(&str, &str)],
) -> Table {
    Table {
        name: name.to_string(),
        kind,
        owner: owner.to_string(),
        storage: storage.to_string(),
        columns: columns
            .iter()
            .map(|(name, data_type)| Column::new(*name, *data_type))
            .collect(),
    }
}
