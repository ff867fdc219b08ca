//! Cascade CLI - non-interactive views of the catalog explorer.
//!
//! Commands:
//! - `catalogs` - list catalog names
//! - `schemas` - schemas of a catalog, optionally filtered
//! - `tables` - tables and views of a schema
//! - `describe` - owner, storage and columns of a table
//! - `context` - inspection hand-off text for a table
//! - `fixture` - print the active fixture as TOML

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cascade_core::{DetailView, ExplorerView, Fixture, InspectionContext, Selection};

#[derive(Parser)]
#[command(
    name = "cascade",
    about = "Cascade CLI - browse catalogs, schemas, tables and columns"
)]
struct Cli {
    /// TOML fixture to browse instead of the embedded catalogs.
    #[arg(long, global = true)]
    fixture: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog names.
    Catalogs,
    /// List schemas of a catalog.
    Schemas {
        catalog: String,

        /// Case-insensitive substring filter on schema names.
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// List tables and views of a schema.
    Tables { catalog: String, schema: String },
    /// Show owner, storage and columns of a table.
    Describe {
        catalog: String,
        schema: String,
        table: String,

        /// Print the detail view as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the inspection hand-off text for a table.
    Context {
        catalog: String,
        schema: String,
        table: String,
    },
    /// Print the active fixture as TOML.
    Fixture,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let cli = Cli::parse();

    let fixture = match &cli.fixture {
        Some(path) => Fixture::from_file(path)
            .with_context(|| format!("load fixture {}", path.display()))?,
        None => Fixture::builtin(),
    };

    let lines = match cli.command {
        Commands::Catalogs => list_catalogs(&fixture),
        Commands::Schemas { catalog, filter } => list_schemas(&fixture, &catalog, &filter),
        Commands::Tables { catalog, schema } => list_tables(&fixture, &catalog, &schema),
        Commands::Describe {
            catalog,
            schema,
            table,
            json,
        } => describe(&fixture, &select(&fixture, &catalog, &schema, &table), json)?,
        Commands::Context {
            catalog,
            schema,
            table,
        } => context(&fixture, &select(&fixture, &catalog, &schema, &table)),
        Commands::Fixture => vec![fixture.to_toml()?],
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// Walk the selection state machine down to a table. Stops at the first
/// name that is not a child of the level above.
fn select(fixture: &Fixture, catalog: &str, schema: &str, table: &str) -> Selection {
    let mut sel = Selection::new();
    if !sel.select_catalog(fixture, catalog) {
        tracing::warn!(catalog, "unknown catalog");
    } else if !sel.select_schema(fixture, schema) {
        tracing::warn!(catalog, schema, "unknown schema");
    } else if !sel.select_table(fixture, table) {
        tracing::warn!(catalog, schema, table, "unknown table");
    }
    sel
}

fn list_catalogs(fixture: &Fixture) -> Vec<String> {
    fixture.catalog_names().into_iter().map(String::from).collect()
}

fn list_schemas(fixture: &Fixture, catalog: &str, filter: &str) -> Vec<String> {
    let mut sel = Selection::new();
    if !sel.select_catalog(fixture, catalog) {
        tracing::warn!(catalog, "unknown catalog");
    }
    sel.set_schema_filter(filter);
    let view = ExplorerView::derive(fixture, &sel);
    view.schema_names().into_iter().map(String::from).collect()
}

fn list_tables(fixture: &Fixture, catalog: &str, schema: &str) -> Vec<String> {
    let mut sel = Selection::new();
    if !sel.select_catalog(fixture, catalog) || !sel.select_schema(fixture, schema) {
        tracing::warn!(catalog, schema, "unknown schema");
    }
    let view = ExplorerView::derive(fixture, &sel);
    let width = view.tables.iter().map(|t| t.name.len()).max().unwrap_or(0);
    view.tables
        .iter()
        .map(|t| format!("{:<width$}  {}", t.name, t.kind.label()))
        .collect()
}

fn describe(fixture: &Fixture, sel: &Selection, json: bool) -> Result<Vec<String>> {
    let view = ExplorerView::derive(fixture, sel);
    let detail = DetailView::from_table(view.table);
    if json {
        return Ok(vec![serde_json::to_string_pretty(&detail)?]);
    }
    Ok(detail.to_lines())
}

fn context(fixture: &Fixture, sel: &Selection) -> Vec<String> {
    let view = ExplorerView::derive(fixture, sel);
    match InspectionContext::for_table(view.table) {
        Some(ctx) => vec![ctx.to_string()],
        None => {
            tracing::warn!("no table selected");
            Vec::new()
        }
    }
}
