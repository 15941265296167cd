//! Read-only queries over the persisted tables.

use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::ingest::artifact::read_table;
use crate::ingest::error::IngestError;
use crate::ingest::rows::{BotLogRecord, EngineLogRecord};

pub mod outcomes;
pub mod performance;
pub mod report;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load table {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: IngestError,
    },
}

pub fn load_bot_logs(path: &Path, delimiter: u8) -> Result<Vec<BotLogRecord>, AnalysisError> {
    read_table(path, delimiter).map_err(|source| AnalysisError::Load { path: path.to_path_buf(), source })
}

pub fn load_engine_logs(path: &Path, delimiter: u8) -> Result<Vec<EngineLogRecord>, AnalysisError> {
    read_table(path, delimiter).map_err(|source| AnalysisError::Load { path: path.to_path_buf(), source })
}
