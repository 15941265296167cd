use crate::analysis::outcomes::{winning_stats, WinningStats};
use crate::analysis::performance::{metrics_by_round, BotLogFilter};
use crate::analysis::report::SummaryReport;
use crate::config::IngestConfig;
use crate::ingest::identity::BotIdentity;
use crate::ingest::table_builder::build_tables;
use crate::tests::{bot_line, engine_line, SimulationTree};

fn contest_against_final1() -> SimulationTree {
    let tree = SimulationTree::new();

    let games = [engine_line(1), engine_line(2), engine_line(0), engine_line(1), engine_line(1)];
    let games = games.iter().map(|x| x.as_str()).collect::<Vec<_>>();
    tree.add_engine_log("II_III_enginelogs", "engine.csv", &games);

    let contest = [bot_line(100, 1), bot_line(300, 2)];
    let contest = contest.iter().map(|x| x.as_str()).collect::<Vec<_>>();
    tree.add_bot_log("II_III_logs", "contestNegamax_g1.csv", &contest);
    tree.add_bot_log("II_III_logs", "contestNegamax_g2.csv", &contest);
    tree.add_bot_log("II_III_logs", "final1_g1.csv", &["5000;9;1 1;400;900;8192;1;1"]);

    tree
}

#[test]
fn matchup_outcomes() -> anyhow::Result<()> {
    let tree = contest_against_final1();
    let tables = build_tables(&IngestConfig::new(tree.root()))?;

    let stats = winning_stats(&tables.engine_logs, BotIdentity::Contest, BotIdentity::Final1);
    assert_eq!(stats, WinningStats { player1_wins: 3, player2_wins: 1, draws: 1 });

    Ok(())
}

#[test]
fn report_covers_both_tables() -> anyhow::Result<()> {
    let tree = contest_against_final1();
    let tables = build_tables(&IngestConfig::new(tree.root()))?;

    let report = SummaryReport::build(&tables.bot_logs, &tables.engine_logs);
    assert_eq!(report.matchups.len(), 1);

    let matchup = &report.matchups[0];
    assert_eq!((matchup.player1, matchup.player2), (BotIdentity::Contest, BotIdentity::Final1));
    assert_eq!(matchup.outcome.map(|x| x.games()), Some(5));
    assert_eq!(matchup.bots.len(), 2);
    assert_eq!(matchup.bots["contestNegamax"].count, 4);
    assert_eq!(matchup.bots["contestNegamax"].mean_nodes, 200.0);
    assert_eq!(matchup.bots["final1"].mean_time_ms, 900.0);

    let text = report.to_string();
    assert!(text.contains("== CONTEST vs FINAL1"));
    assert!(text.contains("CONTEST : 3\nFINAL1 : 1\ndraw : 1"));

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["matchups"][0]["player1"], "CONTEST");
    assert_eq!(json["matchups"][0]["outcome"]["draws"], 1);

    assert!(report.only(BotIdentity::Basic, BotIdentity::Random).matchups.is_empty());

    Ok(())
}

#[test]
fn bot_matchup_without_engine_logs() -> anyhow::Result<()> {
    let tree = SimulationTree::new();
    tree.add_bot_log("R_BUG_logs", "random_g1.csv", &[bot_line(1, 1).as_str()]);

    let tables = build_tables(&IngestConfig::new(tree.root()))?;
    let report = SummaryReport::build(&tables.bot_logs, &tables.engine_logs);

    assert_eq!(report.matchups.len(), 1);
    assert_eq!(report.matchups[0].outcome, None);
    assert_eq!(report.matchups[0].player2, BotIdentity::NotABug);

    Ok(())
}

#[test]
fn depth_by_round() -> anyhow::Result<()> {
    let tree = contest_against_final1();
    let tables = build_tables(&IngestConfig::new(tree.root()))?;

    let contest = BotLogFilter::matchup(BotIdentity::Contest, BotIdentity::Final1).with_bot_type("contestNegamax");
    let by_round = metrics_by_round(contest.apply(&tables.bot_logs));

    assert_eq!(by_round.len(), 2);
    assert_eq!(by_round[&1].mean_nodes, 100.0);
    assert_eq!(by_round[&2].mean_nodes, 300.0);
    assert_eq!(by_round[&2].count, 2);

    Ok(())
}
