use std::path::PathBuf;
use clap::ValueEnum;

pub const DEFAULT_DELIMITER: u8 = b';';
pub const BOT_LOGS_FILE: &str = "df_bot_logs.csv";
pub const ENGINE_LOGS_FILE: &str = "df_engine_logs.csv";

/// What to do with a directory whose name does not route it to either table.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum UnrecognizedPolicy {
    /// Skip without a trace.
    Silent,
    /// Skip, but log a warning naming the directory.
    #[default]
    Warn,
    /// Abort the run.
    Error,
}

/// How strictly the header line of a log file is checked against its column schema.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum HeaderPolicy {
    /// The header must have as many fields as the schema.
    #[default]
    Count,
    /// The header fields must also carry the schema's column names.
    Exact,
}

#[derive(Clone, Debug)]
pub struct IngestConfig {
    pub root: PathBuf,
    pub delimiter: u8,
    pub unrecognized: UnrecognizedPolicy,
    pub headers: HeaderPolicy,
}

impl IngestConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        IngestConfig {
            root: root.into(),
            delimiter: DEFAULT_DELIMITER,
            unrecognized: UnrecognizedPolicy::default(),
            headers: HeaderPolicy::default(),
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_unrecognized(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }

    pub fn with_headers(mut self, policy: HeaderPolicy) -> Self {
        self.headers = policy;
        self
    }
}
