use anyhow::Context;
use clap::Parser;
use tracing::info;
use uttt_simlog::analysis::{load_bot_logs, load_engine_logs};
use uttt_simlog::analysis::report::SummaryReport;
use uttt_simlog::ingest::{self, ArtifactPaths};
use uttt_simlog::input::command_line::{Cli, Command, IngestArgs, SummaryArgs};
use uttt_simlog::logger;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_verbosity(cli.quiet, cli.verbose))?;

    match cli.command {
        Command::Ingest(args) => run_ingest(&args),
        Command::Summary(args) => run_summary(&args),
    }
}

fn run_ingest(args: &IngestArgs) -> anyhow::Result<()> {
    let config = args.config();
    let paths = ArtifactPaths::new(&args.out_dir, &args.bot_logs_file, &args.engine_logs_file);

    let tables = ingest::ingest(&config, &paths)
        .with_context(|| format!("ingestion of {} failed", config.root.display()))?;

    info!(
        bot_logs = %paths.bot_logs.display(),
        bot_log_rows = tables.bot_logs.len(),
        engine_logs = %paths.engine_logs.display(),
        engine_log_rows = tables.engine_logs.len(),
        "Done"
    );

    Ok(())
}

fn run_summary(args: &SummaryArgs) -> anyhow::Result<()> {
    let bot_logs = load_bot_logs(&args.bot_logs, args.delimiter)?;
    let engine_logs = load_engine_logs(&args.engine_logs, args.delimiter)?;

    let mut report = SummaryReport::build(&bot_logs, &engine_logs);
    if let (Some(player1), Some(player2)) = (args.player1, args.player2) {
        report = report.only(player1, player2);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
