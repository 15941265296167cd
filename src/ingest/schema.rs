use std::path::Path;
use csv::StringRecord;
use crate::config::HeaderPolicy;
use crate::ingest::error::IngestError;

/// The ordered columns of one raw log file layout.
///
/// Raw files map to record fields by position; the schema is what ties a position to a name.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ColumnSchema {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

pub const BOT_LOG_SCHEMA: ColumnSchema = ColumnSchema {
    name: "bot log",
    columns: &[
        "nodes",
        "depth",
        "move",
        "cache_hits",
        "time",
        "cache_size",
        "move_number",
        "round_number",
    ],
};

pub const ENGINE_LOG_SCHEMA: ColumnSchema = ColumnSchema {
    name: "engine log",
    columns: &[
        "playerId",
        "winnerId",
        "wonMacroFieldsP1",
        "wonMacroFieldsP2",
        "macroBoard",
        "mBoard",
    ],
};

impl ColumnSchema {
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks the header line of `path` against this schema.
    pub fn validate_header(&self, header: &StringRecord, policy: HeaderPolicy, path: &Path) -> Result<(), IngestError> {
        let matches = match policy {
            HeaderPolicy::Count => header.len() == self.len(),
            HeaderPolicy::Exact => header.len() == self.len()
                && header.iter()
                    .zip(self.columns.iter())
                    .all(|(found, expected)| found.trim().eq_ignore_ascii_case(expected)),
        };

        if matches {
            Ok(())
        } else {
            Err(IngestError::SchemaMismatch {
                path: path.to_path_buf(),
                expected: self.columns.iter().map(|x| x.to_string()).collect(),
                found: header.iter().map(|x| x.to_string()).collect(),
            })
        }
    }

    /// Checks the field count of one data line.
    pub fn validate_record(&self, record: &StringRecord, path: &Path) -> Result<(), IngestError> {
        if record.len() == self.len() {
            return Ok(());
        }

        Err(IngestError::MalformedRecord {
            path: path.to_path_buf(),
            line: record.position().map(|x| x.line()).unwrap_or(0),
            reason: format!("expected {} {} fields, found {}", self.len(), self.name, record.len()),
        })
    }
}
