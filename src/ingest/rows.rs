//! The row types of the two output tables, plus the raw line layouts they are built from.
//!
//! Serde names follow the column headers of the persisted artifacts, which downstream readers
//! query by name.

use serde::{Deserialize, Serialize};
use crate::ingest::directory_tag::DirectoryTag;
use crate::ingest::identity::BotIdentity;

/// One data line of a bot log file, by position.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BotLogLine {
    pub nodes_explored: u64,
    pub search_depth: u32,
    pub chosen_move: String,
    pub cache_hits: u64,
    pub elapsed_time_ms: u64,
    pub cache_size: u64,
    pub move_number: u32,
    pub round_number: u32,
}

/// One data line of an engine log file, by position.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EngineLogLine {
    pub player_id: u32,
    pub winner_id: u32,
    pub won_macro_fields_p1: u32,
    pub won_macro_fields_p2: u32,
    pub macro_board: String,
    pub full_board: String,
}

/// One decision made by one bot during one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotLogRecord {
    pub player1: BotIdentity,
    pub player2: BotIdentity,
    pub bot_type: String,
    pub game_number: u32,
    #[serde(rename = "nodes")]
    pub nodes_explored: u64,
    #[serde(rename = "depth")]
    pub search_depth: u32,
    #[serde(rename = "move")]
    pub chosen_move: String,
    pub cache_hits: u64,
    #[serde(rename = "time")]
    pub elapsed_time_ms: u64,
    pub cache_size: u64,
    pub move_number: u32,
    pub round_number: u32,
}

impl BotLogRecord {
    pub fn new(tag: &DirectoryTag, bot_type: &str, game_number: u32, line: BotLogLine) -> Self {
        BotLogRecord {
            player1: tag.player1,
            player2: tag.player2,
            bot_type: bot_type.to_string(),
            game_number,
            nodes_explored: line.nodes_explored,
            search_depth: line.search_depth,
            chosen_move: line.chosen_move,
            cache_hits: line.cache_hits,
            elapsed_time_ms: line.elapsed_time_ms,
            cache_size: line.cache_size,
            move_number: line.move_number,
            round_number: line.round_number,
        }
    }
}

/// The outcome of one game, as reported by the match engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineLogRecord {
    pub player1: BotIdentity,
    pub player2: BotIdentity,
    pub game_number: u32,
    #[serde(rename = "playerId")]
    pub player_id: u32,
    /// `0` for a draw.
    #[serde(rename = "winnerId")]
    pub winner_id: u32,
    #[serde(rename = "wonMacroFieldsP1")]
    pub won_macro_fields_p1: u32,
    #[serde(rename = "wonMacroFieldsP2")]
    pub won_macro_fields_p2: u32,
    #[serde(rename = "macroBoard")]
    pub macro_board: String,
    #[serde(rename = "mBoard")]
    pub full_board: String,
}

impl EngineLogRecord {
    pub fn new(tag: &DirectoryTag, game_number: u32, line: EngineLogLine) -> Self {
        EngineLogRecord {
            player1: tag.player1,
            player2: tag.player2,
            game_number,
            player_id: line.player_id,
            winner_id: line.winner_id,
            won_macro_fields_p1: line.won_macro_fields_p1,
            won_macro_fields_p2: line.won_macro_fields_p2,
            macro_board: line.macro_board,
            full_board: line.full_board,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner_id == 0
    }
}

/// Rows that belong to a `(player1, player2)` matchup.
pub trait MatchupRow {
    fn matchup(&self) -> (BotIdentity, BotIdentity);
}

impl MatchupRow for BotLogRecord {
    fn matchup(&self) -> (BotIdentity, BotIdentity) {
        (self.player1, self.player2)
    }
}

impl MatchupRow for EngineLogRecord {
    fn matchup(&self) -> (BotIdentity, BotIdentity) {
        (self.player1, self.player2)
    }
}
