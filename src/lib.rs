//! Ingestion and summary of Ultimate Tic-Tac-Toe simulation logs.
//!
//! A simulation run leaves one directory per matchup and log kind, named `<P1>_<P2>_logs` for
//! the per-decision telemetry of the bots and `<P1>_<P2>_enginelogs` for the engine's game
//! outcomes. [`ingest`] flattens such a tree into two `;`-separated tables; [`analysis`] answers
//! questions about them.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod input;
pub mod logger;

#[cfg(test)]
mod tests;
