//! Parsing for the command line at startup

use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use crate::config::{HeaderPolicy, IngestConfig, UnrecognizedPolicy, BOT_LOGS_FILE, ENGINE_LOGS_FILE};
use crate::ingest::identity::BotIdentity;

#[derive(Parser, Debug)]
#[command(author, version)]
#[command(about = "Collects simulation logs into flat tables and summarizes bot performance.")]
pub struct Cli {
    /// More output per occurrence (debug, trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Walk a simulation output directory and write the bot log and engine log tables.
    Ingest(IngestArgs),
    /// Print win/draw counts and mean bot metrics from previously written tables.
    Summary(SummaryArgs),
}

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// The simulation output directory, holding `<P1>_<P2>_<logs|enginelogs>` directories.
    #[arg(short, long)]
    pub root: PathBuf,

    /// Where to write the tables.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    #[arg(long, default_value = BOT_LOGS_FILE)]
    pub bot_logs_file: String,

    #[arg(long, default_value = ENGINE_LOGS_FILE)]
    pub engine_logs_file: String,

    /// What to do with directories whose names cannot be routed.
    #[arg(long, value_enum, default_value = "warn")]
    pub unrecognized: UnrecognizedPolicy,

    /// How strictly to check log file headers.
    #[arg(long, value_enum, default_value = "count")]
    pub headers: HeaderPolicy,

    /// Field separator of both the log files and the written tables.
    #[arg(short, long, default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

impl IngestArgs {
    pub fn config(&self) -> IngestConfig {
        IngestConfig::new(&self.root)
            .with_delimiter(self.delimiter)
            .with_unrecognized(self.unrecognized)
            .with_headers(self.headers)
    }
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[arg(long, default_value = BOT_LOGS_FILE)]
    pub bot_logs: PathBuf,

    #[arg(long, default_value = ENGINE_LOGS_FILE)]
    pub engine_logs: PathBuf,

    /// Restrict the summary to one matchup (needs `--player2`).
    #[arg(long, requires = "player2")]
    pub player1: Option<BotIdentity>,

    #[arg(long, requires = "player1")]
    pub player2: Option<BotIdentity>,

    #[arg(short, long, default_value = ";", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!("delimiter must be a single ASCII character, got `{s}`")),
    }
}
