use crate::roster::Position;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A rostered player: unique name plus the set of positions they may field.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub positions: Vec<Position>,
}

impl Player {
    pub fn new(name: &str, positions: Vec<Position>) -> Self {
        Player {
            name: String::from(name),
            positions,
        }
    }

    pub fn has_position(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} ({})",
            self.name,
            self.positions
                .iter()
                .map(Position::get_short_name)
                .collect::<Vec<_>>()
                .join("/")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_position() {
        let player = Player::new("Avery", vec![Position::FirstBase, Position::SecondBase]);

        assert!(player.has_position(Position::FirstBase));
        assert!(!player.has_position(Position::Catcher));
    }

    #[test]
    fn test_display_joins_short_names() {
        let player = Player::new("Avery", vec![Position::Shortstop, Position::LeftField]);

        assert_eq!(format!("{}", player), "Avery (SS/LF)");
    }
}
