use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use itertools::Itertools;
use serde::Serialize;
use crate::analysis::outcomes::{player_combinations, winning_stats, WinningStats};
use crate::analysis::performance::{metrics_by_bot_type, BotLogFilter, BotMetrics};
use crate::ingest::identity::BotIdentity;
use crate::ingest::rows::{BotLogRecord, EngineLogRecord};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchupReport {
    pub player1: BotIdentity,
    pub player2: BotIdentity,
    /// `None` when the engine logs hold no games for this matchup.
    pub outcome: Option<WinningStats>,
    pub bots: BTreeMap<String, BotMetrics>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SummaryReport {
    pub matchups: Vec<MatchupReport>,
}

impl SummaryReport {
    /// One entry per matchup found in either table; engine log matchups come first.
    pub fn build(bot_logs: &[BotLogRecord], engine_logs: &[EngineLogRecord]) -> Self {
        let matchups = player_combinations(engine_logs)
            .into_iter()
            .chain(player_combinations(bot_logs))
            .unique()
            .map(|(player1, player2)| MatchupReport::build(bot_logs, engine_logs, player1, player2))
            .collect();

        SummaryReport { matchups }
    }

    pub fn only(mut self, player1: BotIdentity, player2: BotIdentity) -> Self {
        self.matchups.retain(|x| x.player1 == player1 && x.player2 == player2);
        self
    }
}

impl MatchupReport {
    pub fn build(
        bot_logs: &[BotLogRecord],
        engine_logs: &[EngineLogRecord],
        player1: BotIdentity,
        player2: BotIdentity,
    ) -> Self {
        let outcome = Some(winning_stats(engine_logs, player1, player2))
            .filter(|x| x.games() > 0);

        let filter = BotLogFilter::matchup(player1, player2);
        let bots = metrics_by_bot_type(filter.apply(bot_logs));

        MatchupReport {
            player1,
            player2,
            outcome,
            bots,
        }
    }
}

impl Display for SummaryReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.matchups.is_empty() {
            return writeln!(f, "No games found.");
        }

        for matchup in self.matchups.iter() {
            writeln!(f, "== {} vs {}", matchup.player1, matchup.player2)?;

            if let Some(outcome) = matchup.outcome {
                writeln!(f, "{}", outcome.describe(matchup.player1, matchup.player2))?;
            }

            for (bot_type, metrics) in matchup.bots.iter() {
                writeln!(
                    f,
                    "{bot_type}: {} decisions, nodes {:.1}, depth {:.2}, time {:.1} ms, cache hits {:.1}, cache size {:.1}",
                    metrics.count,
                    metrics.mean_nodes,
                    metrics.mean_depth,
                    metrics.mean_time_ms,
                    metrics.mean_cache_hits,
                    metrics.mean_cache_size,
                )?;
            }
        }

        Ok(())
    }
}
