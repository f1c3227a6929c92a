use std::collections::{HashMap, HashSet};

/// Pre-game coaching decisions: who pitches which inning and who is
/// unavailable. Every field defaults to empty; a game with no prep file runs
/// on `GamePrep::default()`.
#[derive(Debug, Clone, Default)]
pub struct GamePrep {
    pub pitching_plan: HashMap<u8, String>,
    pub inactive_entire_game: HashSet<String>,
    pub partial_inactivity: HashMap<String, Vec<u8>>,
}

impl GamePrep {
    pub fn planned_pitcher(&self, inning: u8) -> Option<&str> {
        self.pitching_plan.get(&inning).map(String::as_str)
    }

    pub fn is_inactive(&self, player_name: &str) -> bool {
        self.inactive_entire_game.contains(player_name)
    }

    /// True when the player can take the field for the given inning: neither
    /// sitting out the whole game nor excluded for this specific inning.
    pub fn is_available(&self, player_name: &str, inning: u8) -> bool {
        if self.is_inactive(player_name) {
            return false;
        }

        self.partial_inactivity
            .get(player_name)
            .is_none_or(|innings| !innings.contains(&inning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prep_keeps_everyone_available() {
        let prep = GamePrep::default();

        assert!(prep.is_available("Avery", 1));
        assert!(prep.planned_pitcher(1).is_none());
    }

    #[test]
    fn test_partial_inactivity_blocks_only_listed_innings() {
        let prep = GamePrep {
            partial_inactivity: HashMap::from([(String::from("Avery"), vec![3, 4])]),
            ..GamePrep::default()
        };

        assert!(prep.is_available("Avery", 2));
        assert!(!prep.is_available("Avery", 3));
        assert!(!prep.is_available("Avery", 4));
        assert!(prep.is_available("Avery", 5));
    }

    #[test]
    fn test_inactive_entire_game_blocks_every_inning() {
        let prep = GamePrep {
            inactive_entire_game: HashSet::from([String::from("Blake")]),
            ..GamePrep::default()
        };

        for inning in 1..=6 {
            assert!(!prep.is_available("Blake", inning));
        }
    }
}
