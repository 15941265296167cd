use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Directory name does not follow `<P1>_<P2>_<kind>`: {path}")]
    UnrecognizedDirectoryName {
        path: PathBuf,
    },
    #[error("Unknown bot identity code `{code}` in directory {directory}")]
    UnknownIdentityCode {
        code: String,
        directory: PathBuf,
    },
    #[error("Header of {path} does not match the expected schema (expected {expected:?}, found {found:?})")]
    SchemaMismatch {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("Malformed record in {path} at line {line}: {reason}")]
    MalformedRecord {
        path: PathBuf,
        line: u64,
        reason: String,
    },
    #[error("I/O failure on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read or write delimited data at {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IngestError::Io { path: path.into(), source }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        IngestError::Csv { path: path.into(), source }
    }
}
