use std::io;
use tracing::{subscriber::set_global_default, Level};
use tracing_subscriber::FmtSubscriber;

/// Maps the number of `-v` flags to a log level; `info` when none are given.
pub fn level_from_verbosity(quiet: bool, verbose: u8) -> Level {
    if quiet {
        return Level::WARN;
    }

    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a stderr subscriber as the global default. Fails if one is already set.
pub fn init_logger(level: Level) -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    set_global_default(subscriber)?;
    Ok(())
}
