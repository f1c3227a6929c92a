use crate::roster::{POSITION_COUNT, Position};
use serde::Serialize;

/// One inning's defensive alignment. A slot stays `None` when no eligible,
/// constraint-satisfying player exists for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lineup {
    slots: [Option<String>; POSITION_COUNT],
}

impl Lineup {
    pub fn new() -> Self {
        Lineup::default()
    }

    pub fn get(&self, position: Position) -> Option<&str> {
        self.slots[position.index()].as_deref()
    }

    pub fn set(&mut self, position: Position, player_name: String) {
        self.slots[position.index()] = Some(player_name);
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.slots[position.index()].is_none()
    }

    pub fn assigned_players(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lineup_is_fully_open() {
        let lineup = Lineup::new();

        for position in Position::DISPLAY_ORDER {
            assert!(lineup.is_open(position));
        }
        assert_eq!(lineup.assigned_players().count(), 0);
    }

    #[test]
    fn test_set_fills_exactly_one_slot() {
        let mut lineup = Lineup::new();
        lineup.set(Position::Shortstop, String::from("Avery"));

        assert_eq!(lineup.get(Position::Shortstop), Some("Avery"));
        assert!(!lineup.is_open(Position::Shortstop));
        assert!(lineup.is_open(Position::SecondBase));
        assert_eq!(lineup.assigned_players().count(), 1);
    }
}
