//! Cascade Core - catalog model, fixture, cascading selection, derived views.
//!
//! This crate contains everything the explorer needs apart from drawing:
//! - Domain types (catalogs, schemas, tables/views, columns)
//! - The embedded fixture plus TOML loading for alternative fixtures
//! - Four-stage selection state machine (catalog → schema → table)
//! - Pure derivations from (fixture, selection) to the visible lists
//! - Detail view model and the inspection hand-off text

pub mod context;
pub mod derive;
pub mod detail;
pub mod error;
pub mod fixture;
pub mod model;
pub mod selection;

pub use context::InspectionContext;
pub use derive::{catalog_data, schema_data, table_data, visible_schemas, visible_tables, ExplorerView};
pub use detail::{ColumnRow, DetailView, TableDetail};
pub use error::FixtureError;
pub use fixture::Fixture;
pub use model::{Catalog, Column, Schema, Table, TableKind};
pub use selection::{Selection, SelectionStage};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the fixture and selection can be shared with other threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Fixture>();
        require_sync::<Fixture>();
        require_send::<Selection>();
        require_sync::<Selection>();
        require_send::<DetailView>();
        require_sync::<DetailView>();
    }

    #[test]
    fn builtin_fixture_is_valid() {
        let fixture = Fixture::builtin();
        assert!(fixture.validate().is_ok());
    }
}
