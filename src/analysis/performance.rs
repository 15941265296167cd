use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use itertools::Itertools;
use serde::Serialize;
use crate::ingest::identity::BotIdentity;
use crate::ingest::rows::BotLogRecord;

/// Equality/range filter over bot log rows. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotLogFilter {
    pub player1: Option<BotIdentity>,
    pub player2: Option<BotIdentity>,
    pub bot_type: Option<String>,
    pub rounds: Option<RangeInclusive<u32>>,
}

impl BotLogFilter {
    pub fn matchup(player1: BotIdentity, player2: BotIdentity) -> Self {
        BotLogFilter {
            player1: Some(player1),
            player2: Some(player2),
            ..Default::default()
        }
    }

    pub fn with_bot_type(mut self, bot_type: impl Into<String>) -> Self {
        self.bot_type = Some(bot_type.into());
        self
    }

    pub fn with_rounds(mut self, rounds: RangeInclusive<u32>) -> Self {
        self.rounds = Some(rounds);
        self
    }

    pub fn matches(&self, row: &BotLogRecord) -> bool {
        self.player1.map_or(true, |x| x == row.player1)
            && self.player2.map_or(true, |x| x == row.player2)
            && self.bot_type.as_ref().map_or(true, |x| *x == row.bot_type)
            && self.rounds.as_ref().map_or(true, |x| x.contains(&row.round_number))
    }

    pub fn apply<'a>(&'a self, rows: &'a [BotLogRecord]) -> impl Iterator<Item = &'a BotLogRecord> + 'a {
        rows.iter().filter(move |x| self.matches(x))
    }
}

/// Means over a slice of bot decisions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BotMetrics {
    pub count: usize,
    pub mean_nodes: f64,
    pub mean_depth: f64,
    pub mean_time_ms: f64,
    pub mean_cache_hits: f64,
    pub mean_cache_size: f64,
}

/// `None` for an empty slice.
pub fn mean_metrics<'a>(rows: impl IntoIterator<Item = &'a BotLogRecord>) -> Option<BotMetrics> {
    let mut count = 0usize;
    let mut sums = [0f64; 5];

    for row in rows {
        count += 1;
        sums[0] += row.nodes_explored as f64;
        sums[1] += row.search_depth as f64;
        sums[2] += row.elapsed_time_ms as f64;
        sums[3] += row.cache_hits as f64;
        sums[4] += row.cache_size as f64;
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(BotMetrics {
        count,
        mean_nodes: sums[0] / n,
        mean_depth: sums[1] / n,
        mean_time_ms: sums[2] / n,
        mean_cache_hits: sums[3] / n,
        mean_cache_size: sums[4] / n,
    })
}

pub fn metrics_by_bot_type<'a>(rows: impl IntoIterator<Item = &'a BotLogRecord>) -> BTreeMap<String, BotMetrics> {
    rows.into_iter()
        .into_group_map_by(|x| x.bot_type.clone())
        .into_iter()
        .filter_map(|(bot_type, group)| mean_metrics(group).map(|metrics| (bot_type, metrics)))
        .collect()
}

pub fn metrics_by_round<'a>(rows: impl IntoIterator<Item = &'a BotLogRecord>) -> BTreeMap<u32, BotMetrics> {
    rows.into_iter()
        .into_group_map_by(|x| x.round_number)
        .into_iter()
        .filter_map(|(round, group)| mean_metrics(group).map(|metrics| (round, metrics)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(bot_type: &str, round_number: u32, nodes: u64, depth: u32, time: u64) -> BotLogRecord {
        BotLogRecord {
            player1: BotIdentity::Basic,
            player2: BotIdentity::Contest,
            bot_type: bot_type.to_string(),
            game_number: 1,
            nodes_explored: nodes,
            search_depth: depth,
            chosen_move: "0 0".to_string(),
            cache_hits: 0,
            elapsed_time_ms: time,
            cache_size: 10,
            move_number: round_number,
            round_number,
        }
    }

    #[test]
    fn means_per_bot_type() {
        let rows = vec![
            row("basicNegamax", 1, 100, 4, 10),
            row("basicNegamax", 2, 300, 6, 30),
            row("contestNegamax", 1, 1000, 8, 50),
        ];

        let by_bot = metrics_by_bot_type(&rows);
        assert_eq!(by_bot.keys().collect::<Vec<_>>(), vec!["basicNegamax", "contestNegamax"]);

        let basic = by_bot["basicNegamax"];
        assert_eq!(basic.count, 2);
        assert_eq!(basic.mean_nodes, 200.0);
        assert_eq!(basic.mean_depth, 5.0);
        assert_eq!(basic.mean_time_ms, 20.0);
        assert_eq!(basic.mean_cache_size, 10.0);
    }

    #[test]
    fn filter_by_round_range() {
        let rows = vec![
            row("basicNegamax", 1, 100, 4, 10),
            row("basicNegamax", 5, 300, 6, 30),
            row("contestNegamax", 3, 1000, 8, 50),
        ];

        let filter = BotLogFilter::matchup(BotIdentity::Basic, BotIdentity::Contest)
            .with_bot_type("basicNegamax")
            .with_rounds(1..=4);
        assert_eq!(filter.apply(&rows).count(), 1);

        let by_round = metrics_by_round(BotLogFilter::default().with_rounds(2..=10).apply(&rows));
        assert_eq!(by_round.keys().copied().collect::<Vec<_>>(), vec![3, 5]);

        let other_matchup = BotLogFilter::matchup(BotIdentity::Final1, BotIdentity::Contest);
        assert_eq!(mean_metrics(other_matchup.apply(&rows)), None);
    }
}
