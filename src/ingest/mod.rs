//! Turns a tree of simulation log directories into the two flat tables.
//!
//! The walk ([`locator`]) routes each directory by its name ([`directory_tag`]); the
//! [`table_builder`] parses the files of every routed directory and [`artifact`] persists the
//! result.

use tracing::info;
use crate::config::IngestConfig;

pub mod artifact;
pub mod counter;
pub mod directory_tag;
pub mod error;
pub mod identity;
pub mod locator;
pub mod rows;
pub mod schema;
pub mod table_builder;

pub use artifact::ArtifactPaths;
pub use error::IngestError;
pub use table_builder::LogTables;

/// Runs a full ingestion: build both tables, then write them.
///
/// Artifacts are only touched once both tables have been built, so a failing run leaves any
/// previous artifacts in place.
pub fn ingest(config: &IngestConfig, paths: &ArtifactPaths) -> Result<LogTables, IngestError> {
    let tables = table_builder::build_tables(config)?;

    info!(
        bot_log_rows = tables.bot_logs.len(),
        engine_log_rows = tables.engine_logs.len(),
        "Built tables"
    );

    artifact::write_tables(&tables, paths, config.delimiter)?;

    Ok(tables)
}
