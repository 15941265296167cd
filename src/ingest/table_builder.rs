use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use csv::Trim;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use crate::config::IngestConfig;
use crate::ingest::counter::{BotGameCounter, EngineGameCounter};
use crate::ingest::directory_tag::{DirectoryTag, LogKind};
use crate::ingest::error::IngestError;
use crate::ingest::locator::{DirectoryPlan, LocatedDirectory};
use crate::ingest::rows::{BotLogLine, BotLogRecord, EngineLogLine, EngineLogRecord};
use crate::ingest::schema::{ColumnSchema, BOT_LOG_SCHEMA, ENGINE_LOG_SCHEMA};

/// Separates the bot type from the rest of a bot log file name, e.g. `basicNegamax_g1.csv`.
pub const BOT_TYPE_SEPARATOR: char = '_';

/// The two tables produced by one ingestion run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogTables {
    pub bot_logs: Vec<BotLogRecord>,
    pub engine_logs: Vec<EngineLogRecord>,
}

/// Walks `config.root` and builds both tables in memory.
///
/// Any fatal error aborts the whole run; nothing partial is returned.
pub fn build_tables(config: &IngestConfig) -> Result<LogTables, IngestError> {
    let plan = DirectoryPlan::scan(&config.root, config.unrecognized)?;

    info!(
        root = %config.root.display(),
        directories = plan.directories.len(),
        skipped = plan.skipped.len(),
        "Scanned log directories"
    );

    build_from_plan(&plan, config)
}

pub fn build_from_plan(plan: &DirectoryPlan, config: &IngestConfig) -> Result<LogTables, IngestError> {
    let mut tables = LogTables::default();

    for directory in plan.directories.iter() {
        let tag = match directory.tag {
            Some(tag) => tag,
            None => continue,
        };

        match tag.kind {
            LogKind::BotLog => {
                let records = read_bot_log_directory(directory, &tag, config)?;
                info!(directory = %directory.path.display(), files = directory.files.len(), rows = records.len(), "Read bot logs");
                tables.bot_logs.extend(records);
            },
            LogKind::EngineLog => {
                let records = read_engine_log_directory(directory, &tag, config)?;
                info!(directory = %directory.path.display(), files = directory.files.len(), rows = records.len(), "Read engine logs");
                tables.engine_logs.extend(records);
            },
            LogKind::Unrecognized => {},
        }
    }

    Ok(tables)
}

/// The bot variant that wrote a bot log file: the file name up to its first `_`.
pub fn bot_type_of(file: &Path) -> String {
    let name = file.file_name()
        .map(|x| x.to_string_lossy().to_string())
        .unwrap_or_default();

    match name.split_once(BOT_TYPE_SEPARATOR) {
        Some((bot_type, _)) => bot_type.to_string(),
        None => file.file_stem()
            .map(|x| x.to_string_lossy().to_string())
            .unwrap_or(name),
    }
}

/// Reads every file of a bot log directory, one game per file.
#[instrument(level = "debug", skip_all, fields(directory = %directory.path.display()))]
pub fn read_bot_log_directory(
    directory: &LocatedDirectory,
    tag: &DirectoryTag,
    config: &IngestConfig,
) -> Result<Vec<BotLogRecord>, IngestError> {
    let mut counter = BotGameCounter::default();
    let mut records = vec![];

    for file in directory.files.iter() {
        let bot_type = bot_type_of(file);
        counter = counter.advance(&bot_type);
        let game_number = counter.game_number();

        let lines: Vec<BotLogLine> = read_log_file(file, &BOT_LOG_SCHEMA, config)?;
        debug!(file = %file.display(), bot_type = %bot_type, game_number, rows = lines.len(), "Read bot log file");

        records.extend(
            lines.into_iter().map(|line| BotLogRecord::new(tag, &bot_type, game_number, line))
        );
    }

    Ok(records)
}

/// Reads every file of an engine log directory, one game per data line.
#[instrument(level = "debug", skip_all, fields(directory = %directory.path.display()))]
pub fn read_engine_log_directory(
    directory: &LocatedDirectory,
    tag: &DirectoryTag,
    config: &IngestConfig,
) -> Result<Vec<EngineLogRecord>, IngestError> {
    let mut counter = EngineGameCounter::default();
    let mut records = vec![];

    for file in directory.files.iter() {
        let lines: Vec<EngineLogLine> = read_log_file(file, &ENGINE_LOG_SCHEMA, config)?;
        debug!(file = %file.display(), rows = lines.len(), "Read engine log file");

        for line in lines {
            counter = counter.advance();
            records.push(EngineLogRecord::new(tag, counter.game_number(), line));
        }
    }

    Ok(records)
}

/// Parses one raw log file: a header line, then one `T` per data line, mapped by position.
pub fn read_log_file<T: DeserializeOwned>(
    path: &Path,
    schema: &ColumnSchema,
    config: &IngestConfig,
) -> Result<Vec<T>, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(BufReader::new(file));

    let header = reader.headers()
        .map_err(|e| IngestError::csv(path, e))?
        .clone();
    schema.validate_header(&header, config.headers, path)?;

    let mut result = vec![];
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        schema.validate_record(&record, path)?;

        let line = record.deserialize(None).map_err(|e| IngestError::MalformedRecord {
            path: path.to_path_buf(),
            line: record.position().map(|x| x.line()).unwrap_or(0),
            reason: e.to_string(),
        })?;

        result.push(line);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use super::*;

    #[test]
    fn bot_type_is_leading_token() {
        assert_eq!(bot_type_of(&PathBuf::from("logs/basicNegamax_g1.csv")), "basicNegamax");
        assert_eq!(bot_type_of(&PathBuf::from("contest_bitboard_12.csv")), "contest");
        assert_eq!(bot_type_of(&PathBuf::from("final1.csv")), "final1");
    }
}
