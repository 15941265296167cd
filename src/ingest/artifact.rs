use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use crate::ingest::error::IngestError;
use crate::ingest::table_builder::LogTables;

pub const BOT_LOGS_COLUMNS: [&str; 12] = [
    "player1",
    "player2",
    "bot_type",
    "game_number",
    "nodes",
    "depth",
    "move",
    "cache_hits",
    "time",
    "cache_size",
    "move_number",
    "round_number",
];

pub const ENGINE_LOGS_COLUMNS: [&str; 9] = [
    "player1",
    "player2",
    "game_number",
    "playerId",
    "winnerId",
    "wonMacroFieldsP1",
    "wonMacroFieldsP2",
    "macroBoard",
    "mBoard",
];

/// Where one ingestion run put its two tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub bot_logs: PathBuf,
    pub engine_logs: PathBuf,
}

impl ArtifactPaths {
    pub fn new(out_dir: &Path, bot_logs_file: &str, engine_logs_file: &str) -> Self {
        ArtifactPaths {
            bot_logs: out_dir.join(bot_logs_file),
            engine_logs: out_dir.join(engine_logs_file),
        }
    }
}

/// Writes both tables.
///
/// Both are staged in full before either replaces its artifact, so a failing run leaves the
/// previous pair of artifacts in place and no staging files behind.
pub fn write_tables(tables: &LogTables, paths: &ArtifactPaths, delimiter: u8) -> Result<(), IngestError> {
    let bot_logs = stage_table(&tables.bot_logs, &BOT_LOGS_COLUMNS, &paths.bot_logs, delimiter)?;
    let engine_logs = match stage_table(&tables.engine_logs, &ENGINE_LOGS_COLUMNS, &paths.engine_logs, delimiter) {
        Ok(staged) => staged,
        Err(error) => {
            bot_logs.discard();
            return Err(error);
        },
    };

    commit(&[bot_logs, engine_logs])
}

/// Writes a header row naming `columns`, then one line per row.
pub fn write_table<T: Serialize>(rows: &[T], columns: &[&str], path: &Path, delimiter: u8) -> Result<(), IngestError> {
    let staged = stage_table(rows, columns, path, delimiter)?;
    commit(&[staged])
}

/// A table written in full next to its artifact, waiting to replace it.
struct StagedTable<'a> {
    target: &'a Path,
    staging: PathBuf,
    rows: usize,
}

impl StagedTable<'_> {
    fn discard(&self) {
        let _ = fs::remove_file(&self.staging);
    }
}

/// An artifact that has been replaced, and where its previous version was moved.
struct ReplacedTable<'a> {
    target: &'a Path,
    previous: Option<PathBuf>,
}

fn stage_table<'a, T: Serialize>(
    rows: &[T],
    columns: &[&str],
    target: &'a Path,
    delimiter: u8,
) -> Result<StagedTable<'a>, IngestError> {
    let staged = StagedTable {
        target,
        staging: sibling_path(target, ".partial"),
        rows: rows.len(),
    };

    match write_rows(rows, columns, &staged.staging, delimiter) {
        Ok(()) => Ok(staged),
        Err(error) => {
            staged.discard();
            Err(error)
        },
    }
}

/// The header is written by hand so that an empty table still carries it.
fn write_rows<T: Serialize>(rows: &[T], columns: &[&str], path: &Path, delimiter: u8) -> Result<(), IngestError> {
    let file = File::create(path).map_err(|e| IngestError::io(path, e))?;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(columns).map_err(|e| IngestError::csv(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| IngestError::csv(path, e))?;
    }

    // flushes the BufWriter too
    writer.flush().map_err(|e| IngestError::io(path, e))?;

    Ok(())
}

/// Moves every staged table into place, or none of them.
fn commit(staged: &[StagedTable]) -> Result<(), IngestError> {
    if let Some(table) = staged.iter().find(|x| x.target.exists() && !x.target.is_file()) {
        staged.iter().for_each(|x| x.discard());
        return Err(IngestError::io(
            table.target,
            io::Error::new(io::ErrorKind::Other, "artifact path exists and is not a file"),
        ));
    }

    let mut replaced = vec![];
    for table in staged {
        match replace(table) {
            Ok(entry) => replaced.push(entry),
            Err(error) => {
                roll_back(&replaced);
                staged.iter().for_each(|x| x.discard());
                return Err(error);
            },
        }
    }

    for entry in replaced {
        if let Some(previous) = entry.previous {
            let _ = fs::remove_file(previous);
        }
    }

    for table in staged {
        info!(path = %table.target.display(), rows = table.rows, "Wrote table");
    }

    Ok(())
}

fn replace<'a>(table: &StagedTable<'a>) -> Result<ReplacedTable<'a>, IngestError> {
    let previous = if table.target.is_file() {
        let previous = sibling_path(table.target, ".previous");
        fs::rename(table.target, &previous).map_err(|e| IngestError::io(table.target, e))?;
        Some(previous)
    } else {
        None
    };

    if let Err(e) = fs::rename(&table.staging, table.target) {
        if let Some(previous) = previous.as_ref() {
            let _ = fs::rename(previous, table.target);
        }
        return Err(IngestError::io(table.target, e));
    }

    Ok(ReplacedTable {
        target: table.target,
        previous,
    })
}

/// Undoes `replaced`, newest first, restoring the previous artifacts.
fn roll_back(replaced: &[ReplacedTable]) {
    for entry in replaced.iter().rev() {
        let _ = fs::remove_file(entry.target);
        if let Some(previous) = entry.previous.as_ref() {
            let _ = fs::rename(previous, entry.target);
        }
    }
}

/// Reads an artifact written by [`write_table`], mapping columns by header name.
pub fn read_table<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(BufReader::new(file));

    reader.deserialize()
        .map(|row| row.map_err(|e| IngestError::csv(path, e)))
        .collect()
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name()
        .map(|x| x.to_os_string())
        .unwrap_or_default();
    name.push(suffix);

    path.with_file_name(name)
}
