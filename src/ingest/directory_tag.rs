use std::fmt::{Display, Formatter};
use std::path::Path;
use lazy_static::lazy_static;
use regex::Regex;
use crate::ingest::error::IngestError;
use crate::ingest::identity::BotIdentity;

lazy_static! {
    // `<P1>_<P2>_<kind>`, e.g. `III_IV_enginelogs`
    static ref DIRECTORY_NAME: Regex = Regex::new(r"^([A-Z]{1,3})_([A-Z]{1,3})_([a-z]*)$").unwrap();
}

pub const BOT_LOG_KIND: &str = "logs";
pub const ENGINE_LOG_KIND: &str = "enginelogs";

/// Which table, and which raw column layout, the files of a directory belong to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LogKind {
    BotLog,
    EngineLog,
    Unrecognized,
}

impl LogKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            BOT_LOG_KIND => LogKind::BotLog,
            ENGINE_LOG_KIND => LogKind::EngineLog,
            _ => LogKind::Unrecognized,
        }
    }
}

impl Display for LogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogKind::BotLog => write!(f, "BotLog"),
            LogKind::EngineLog => write!(f, "EngineLog"),
            LogKind::Unrecognized => write!(f, "Unrecognized"),
        }
    }
}

/// Metadata carried by a log directory's name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DirectoryTag {
    pub player1: BotIdentity,
    pub player2: BotIdentity,
    pub kind: LogKind,
}

impl DirectoryTag {
    /// Parses a directory base name.
    ///
    /// Returns `Ok(None)` when the name does not follow the `<P1>_<P2>_<kind>` pattern. A name that
    /// does follow it but names an unknown identity code is an error: it means the logs were
    /// produced by a bot this tool does not know about.
    pub fn parse(name: &str, directory: &Path) -> Result<Option<DirectoryTag>, IngestError> {
        let captures = match DIRECTORY_NAME.captures(name) {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let identity = |code: &str| {
            BotIdentity::from_code(code).ok_or_else(|| IngestError::UnknownIdentityCode {
                code: code.to_string(),
                directory: directory.to_path_buf(),
            })
        };

        Ok(Some(DirectoryTag {
            player1: identity(&captures[1])?,
            player2: identity(&captures[2])?,
            kind: LogKind::from_token(&captures[3]),
        }))
    }

    /// Parses the final component of `directory`.
    pub fn from_directory(directory: &Path) -> Result<Option<DirectoryTag>, IngestError> {
        match directory.file_name().and_then(|name| name.to_str()) {
            Some(name) => DirectoryTag::parse(name, directory),
            None => Ok(None),
        }
    }
}

/// The log kind of a directory, `Unrecognized` for names that do not match at all.
pub fn log_kind(tag: Option<&DirectoryTag>) -> LogKind {
    tag.map(|x| x.kind).unwrap_or(LogKind::Unrecognized)
}
