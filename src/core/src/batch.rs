use crate::game::GamePrep;
use crate::history::PlayerStatsCollection;
use crate::lineup::{LineupGenerationResult, LineupGenerator};
use crate::roster::Player;
use rayon::prelude::*;

/// Everything one game's generation run needs besides the shared historical
/// stats.
#[derive(Debug, Clone)]
pub struct GameScenario {
    pub players: Vec<Player>,
    pub prep: GamePrep,
    pub innings: u8,
}

pub struct LineupBatch;

impl LineupBatch {
    /// Generate lineups for independent games in parallel. Each game's run is
    /// self-contained, so the only ordering guarantee needed is that results
    /// come back in scenario order.
    pub fn generate_all(
        scenarios: &[GameScenario],
        stats: &PlayerStatsCollection,
    ) -> Vec<LineupGenerationResult> {
        scenarios
            .par_iter()
            .map(|scenario| {
                LineupGenerator::generate(&scenario.players, scenario.innings, &scenario.prep, stats)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineup::DEFAULT_INNINGS;
    use crate::roster::Position;

    fn generate_test_scenario(innings: u8) -> GameScenario {
        let everywhere: Vec<Position> = Position::DISPLAY_ORDER.to_vec();

        GameScenario {
            players: (1..=10)
                .map(|n| Player::new(&format!("Player {}", n), everywhere.clone()))
                .collect(),
            prep: GamePrep::default(),
            innings,
        }
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let scenarios = vec![
            generate_test_scenario(DEFAULT_INNINGS),
            generate_test_scenario(7),
            generate_test_scenario(5),
        ];
        let stats = PlayerStatsCollection::default();

        let batch = LineupBatch::generate_all(&scenarios, &stats);

        assert_eq!(batch.len(), scenarios.len());

        for (scenario, result) in scenarios.iter().zip(&batch) {
            let sequential = LineupGenerator::generate(
                &scenario.players,
                scenario.innings,
                &scenario.prep,
                &stats,
            );

            assert_eq!(*result, sequential);
            assert_eq!(result.lineups.len(), scenario.innings as usize);
        }
    }
}
