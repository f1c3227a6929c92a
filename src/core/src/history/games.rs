use std::collections::{HashMap, HashSet};

/// Reserved label marking players who sat out an entire game.
pub const INACTIVE_LABEL: &str = "Inactive";

/// Innings logged under one position label for one game.
///
/// The label stays a raw string here: scorekeepers occasionally log innings
/// under labels outside the nine standard positions, and those innings still
/// count toward a player's totals even though they have no per-position
/// bucket.
#[derive(Debug, Clone, Default)]
pub struct PositionEntry {
    pub label: String,
    pub innings: HashMap<String, u32>,
}

impl PositionEntry {
    pub fn new(label: &str, innings: HashMap<String, u32>) -> Self {
        PositionEntry {
            label: String::from(label),
            innings,
        }
    }

    pub fn total_innings(&self) -> u32 {
        self.innings.values().sum()
    }
}

/// One game's position log plus the players who sat it out entirely.
#[derive(Debug, Clone, Default)]
pub struct GameLog {
    pub id: String,
    pub entries: Vec<PositionEntry>,
    pub inactive: HashSet<String>,
}

impl GameLog {
    /// Canonical inning count for this game: the maximum per-position innings
    /// sum. Position logs drift out of sync when substitutions are recorded
    /// unevenly; the busiest position is taken as the true game length.
    pub fn canonical_innings(&self) -> u32 {
        self.entries
            .iter()
            .map(PositionEntry::total_innings)
            .max()
            .unwrap_or(0)
    }

    pub fn is_inactive(&self, player_name: &str) -> bool {
        self.inactive.contains(player_name)
    }
}

/// The full historical record the aggregator consumes.
#[derive(Debug, Clone, Default)]
pub struct PositionHistory {
    pub games: Vec<GameLog>,
}

impl PositionHistory {
    pub fn new(games: Vec<GameLog>) -> Self {
        PositionHistory { games }
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
