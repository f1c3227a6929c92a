pub mod batch;
pub mod game;
pub mod history;
pub mod lineup;
pub mod roster;
pub mod utils;

// Re-export roster items
pub use roster::{POSITION_COUNT, Player, Position};

// Re-export history items
pub use history::{
    GameLog, INACTIVE_LABEL, InningsAggregator, PlayerHistoricalStats, PlayerStatsCollection,
    PositionEntry, PositionHistory,
};

// Re-export game-prep items
pub use game::GamePrep;

// Re-export lineup items
pub use lineup::{
    DEFAULT_INNINGS, Lineup, LineupGenerationResult, LineupGenerator, LineupWarning,
    PlayerGameSummary, PlayerUsage, RecentPositions,
};

// Re-export batch items
pub use batch::{GameScenario, LineupBatch};
