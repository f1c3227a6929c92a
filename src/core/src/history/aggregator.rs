use crate::history::stats::{PlayerHistoricalStats, PlayerStatsCollection};
use crate::history::{GameLog, PositionHistory};
use crate::roster::Position;
use log::debug;
use std::collections::HashMap;
use std::str::FromStr;

/// Builds per-player availability statistics from historical position logs.
pub struct InningsAggregator;

impl InningsAggregator {
    pub fn aggregate(history: &PositionHistory) -> PlayerStatsCollection {
        let canonical_innings: HashMap<&str, u32> = history
            .games
            .iter()
            .map(|game| (game.id.as_str(), game.canonical_innings()))
            .collect();

        let mut stats: HashMap<String, PlayerHistoricalStats> = HashMap::new();

        for game in &history.games {
            for entry in &game.entries {
                let position = Position::from_str(&entry.label).ok();

                for (player_name, &innings) in &entry.innings {
                    stats
                        .entry(player_name.clone())
                        .or_default()
                        .record_innings(position, innings);
                }
            }
        }

        for (player_name, player_stats) in &mut stats {
            for game in &history.games {
                if !game.is_inactive(player_name) {
                    player_stats.record_available(canonical_innings[game.id.as_str()]);
                }
            }
        }

        debug!(
            "aggregated {} games into stats for {} players",
            history.games.len(),
            stats.len()
        );

        PlayerStatsCollection::new(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PositionEntry;
    use std::collections::HashSet;

    fn entry(label: &str, logged: &[(&str, u32)]) -> PositionEntry {
        PositionEntry::new(
            label,
            logged
                .iter()
                .map(|(name, innings)| (String::from(*name), *innings))
                .collect(),
        )
    }

    fn game(id: &str, entries: Vec<PositionEntry>, inactive: &[&str]) -> GameLog {
        GameLog {
            id: String::from(id),
            entries,
            inactive: inactive.iter().map(|name| String::from(*name)).collect(),
        }
    }

    /// A seven-inning game A and a six-inning game B; "Avery" sat out game B
    /// entirely.
    fn generate_test_history() -> PositionHistory {
        let game_a = game(
            "Game A",
            vec![
                entry("P", &[("Avery", 7)]),
                entry("C", &[("Blake", 7)]),
                entry("1B", &[("Casey", 7)]),
                entry("2B", &[("Drew", 7)]),
                entry("SS", &[("Emery", 7)]),
                entry("3B", &[("Finley", 7)]),
            ],
            &[],
        );

        let game_b = game(
            "Game B",
            vec![
                entry("P", &[("Blake", 6)]),
                entry("C", &[("Casey", 6)]),
                entry("1B", &[("Drew", 6)]),
            ],
            &["Avery"],
        );

        PositionHistory::new(vec![game_a, game_b])
    }

    #[test]
    fn test_available_innings_exclude_inactive_games() {
        let stats = InningsAggregator::aggregate(&generate_test_history());

        // Game A runs 7 innings, game B runs 6. Avery sat out game B.
        let avery = stats.get("Avery").unwrap();
        assert_eq!(avery.available_innings, 7);
        assert_eq!(avery.total_innings, 7);

        let blake = stats.get("Blake").unwrap();
        assert_eq!(blake.available_innings, 13);
        assert_eq!(blake.total_innings, 13);
    }

    #[test]
    fn test_available_innings_track_the_canonical_game_length() {
        // Game A's pitching log alone accounts for 42 innings (six pitchers,
        // seven innings each); game B runs 6. Avery sat out game B.
        let pitchers: Vec<(&str, u32)> = ["Avery", "Blake", "Casey", "Drew", "Emery", "Finley"]
            .iter()
            .map(|&name| (name, 7))
            .collect();

        let history = PositionHistory::new(vec![
            game("Game A", vec![entry("P", &pitchers)], &[]),
            game("Game B", vec![entry("C", &[("Blake", 6)])], &["Avery"]),
        ]);

        let stats = InningsAggregator::aggregate(&history);

        assert_eq!(stats.get("Avery").unwrap().available_innings, 42);
        assert_eq!(stats.get("Blake").unwrap().available_innings, 48);
    }

    #[test]
    fn test_total_never_exceeds_available_for_consistent_logs() {
        let stats = InningsAggregator::aggregate(&generate_test_history());

        for player_name in stats.player_names() {
            let player = stats.get(player_name).unwrap();
            assert!(player.total_innings <= player.available_innings);
        }
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let history = generate_test_history();

        let first = InningsAggregator::aggregate(&history);
        let second = InningsAggregator::aggregate(&history);

        assert_eq!(first, second);
    }

    #[test]
    fn test_unrecognized_label_feeds_totals_but_no_bucket() {
        let history = PositionHistory::new(vec![game(
            "Game 1",
            vec![
                entry("P", &[("Avery", 4)]),
                entry("EH", &[("Avery", 2)]),
            ],
            &[],
        )]);

        let stats = InningsAggregator::aggregate(&history);
        let avery = stats.get("Avery").unwrap();

        assert_eq!(avery.total_innings, 6);
        assert_eq!(avery.innings_at(Position::Pitcher), 4);

        let bucketed: u32 = Position::DISPLAY_ORDER
            .iter()
            .map(|&position| avery.innings_at(position))
            .sum();
        assert_eq!(bucketed, 4);
    }

    #[test]
    fn test_fully_inactive_game_contributes_nothing() {
        let history = PositionHistory::new(vec![
            game("Game 1", vec![entry("SS", &[("Avery", 5)])], &[]),
            game("Game 2", Vec::new(), &["Avery"]),
        ]);

        let stats = InningsAggregator::aggregate(&history);
        let avery = stats.get("Avery").unwrap();

        assert_eq!(avery.available_innings, 5);
        assert_eq!(avery.play_percentage(), 100.0);
    }

    #[test]
    fn test_empty_history_yields_empty_collection() {
        let stats = InningsAggregator::aggregate(&PositionHistory::default());

        assert!(stats.is_empty());
    }
}
