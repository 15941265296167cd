use itertools::Itertools;
use serde::Serialize;
use crate::ingest::identity::BotIdentity;
use crate::ingest::rows::{EngineLogRecord, MatchupRow};

/// Win/loss/draw counts of one matchup, seen from `player1`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct WinningStats {
    pub player1_wins: usize,
    pub player2_wins: usize,
    pub draws: usize,
}

impl WinningStats {
    pub fn games(&self) -> usize {
        self.player1_wins + self.player2_wins + self.draws
    }

    pub fn record(mut self, game: &EngineLogRecord) -> Self {
        match Outcome::of(game) {
            Outcome::Player1Win => self.player1_wins += 1,
            Outcome::Player2Win => self.player2_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self
    }

    pub fn describe(&self, player1: BotIdentity, player2: BotIdentity) -> String {
        format!(
            "{player1} : {}\n{player2} : {}\ndraw : {}",
            self.player1_wins, self.player2_wins, self.draws
        )
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Player1Win,
    Player2Win,
    Draw,
}

impl Outcome {
    /// The engine logs from player1's seat: `winnerId` equal to `playerId` is a win for player1,
    /// any other non-zero `winnerId` a win for player2.
    pub fn of(game: &EngineLogRecord) -> Self {
        if game.is_draw() {
            Outcome::Draw
        } else if game.winner_id == game.player_id {
            Outcome::Player1Win
        } else {
            Outcome::Player2Win
        }
    }
}

pub fn engine_games_by_player(
    games: &[EngineLogRecord],
    player1: BotIdentity,
    player2: BotIdentity,
) -> impl Iterator<Item = &EngineLogRecord> {
    games.iter().filter(move |x| x.player1 == player1 && x.player2 == player2)
}

pub fn winning_stats(games: &[EngineLogRecord], player1: BotIdentity, player2: BotIdentity) -> WinningStats {
    engine_games_by_player(games, player1, player2)
        .fold(WinningStats::default(), WinningStats::record)
}

/// Distinct `(player1, player2)` pairs, in order of first appearance.
pub fn player_combinations<R: MatchupRow>(rows: &[R]) -> Vec<(BotIdentity, BotIdentity)> {
    rows.iter().map(|x| x.matchup()).unique().collect()
}
