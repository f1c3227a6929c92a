use crate::roster::{POSITION_COUNT, Position};
use serde::Serialize;
use std::collections::HashMap;

/// Cumulative innings a single player has on record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerHistoricalStats {
    innings_by_position: [u32; POSITION_COUNT],
    pub total_innings: u32,
    pub available_innings: u32,
}

impl PlayerHistoricalStats {
    pub fn innings_at(&self, position: Position) -> u32 {
        self.innings_by_position[position.index()]
    }

    pub(crate) fn record_innings(&mut self, position: Option<Position>, innings: u32) {
        if let Some(position) = position {
            self.innings_by_position[position.index()] += innings;
        }

        self.total_innings += innings;
    }

    pub(crate) fn record_available(&mut self, innings: u32) {
        self.available_innings += innings;
    }

    /// Share of available innings actually played, as a percentage rounded to
    /// two decimals. A player with no available innings on record is defined
    /// to have played 0.0% rather than dividing by zero.
    pub fn play_percentage(&self) -> f32 {
        if self.available_innings == 0 {
            return 0.0;
        }

        let percentage = self.total_innings as f32 / self.available_innings as f32 * 100.0;

        (percentage * 100.0).round() / 100.0
    }
}

/// Aggregated stats for every player named in the historical log, with a
/// sorted name listing for deterministic rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerStatsCollection {
    stats: HashMap<String, PlayerHistoricalStats>,
    names: Vec<String>,
}

impl PlayerStatsCollection {
    pub fn new(stats: HashMap<String, PlayerHistoricalStats>) -> Self {
        let mut names: Vec<String> = stats.keys().cloned().collect();
        names.sort();

        PlayerStatsCollection { stats, names }
    }

    pub fn get(&self, player_name: &str) -> Option<&PlayerHistoricalStats> {
        self.stats.get(player_name)
    }

    /// Historical fairness weight for a player. Unknown players rank the same
    /// as players who played none of their available innings.
    pub fn play_percentage_of(&self, player_name: &str) -> f32 {
        self.get(player_name)
            .map(PlayerHistoricalStats::play_percentage)
            .unwrap_or(0.0)
    }

    pub fn player_names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
