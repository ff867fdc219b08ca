use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or validating a fixture file.
///
/// The embedded fixture never produces these; they only arise from
/// alternative fixtures read from disk.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize fixture: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("duplicate catalog '{catalog}'")]
    DuplicateCatalog { catalog: String },

    #[error("duplicate schema '{schema}' in catalog '{catalog}'")]
    DuplicateSchema { catalog: String, schema: String },

    #[error("duplicate table '{table}' in schema '{catalog}.{schema}'")]
    DuplicateTable {
        catalog: String,
        schema: String,
        table: String,
    },
}
