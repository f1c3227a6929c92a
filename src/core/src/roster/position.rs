use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// The nine standard defensive positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    Shortstop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
}

pub const POSITION_COUNT: usize = 9;

impl Position {
    /// Order positions are filled in during assignment. The pitcher slot is
    /// normally taken by the pitching plan before this order is walked, so it
    /// sits behind the contested infield spots.
    pub const ASSIGNMENT_PRIORITY: [Position; POSITION_COUNT] = [
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::Catcher,
        Position::Pitcher,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    /// Order positions appear in rendered lineup tables.
    pub const DISPLAY_ORDER: [Position; POSITION_COUNT] = [
        Position::Pitcher,
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::Shortstop,
        Position::ThirdBase,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
        }
    }

    pub fn is_infield(&self) -> bool {
        matches!(
            self,
            Position::Pitcher
                | Position::Catcher
                | Position::FirstBase
                | Position::SecondBase
                | Position::ThirdBase
                | Position::Shortstop
        )
    }

    pub fn is_outfield(&self) -> bool {
        !self.is_infield()
    }

    /// Stable slot index used by per-inning lineups.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.get_short_name())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Position::Pitcher),
            "C" => Ok(Position::Catcher),
            "1B" => Ok(Position::FirstBase),
            "2B" => Ok(Position::SecondBase),
            "3B" => Ok(Position::ThirdBase),
            "SS" => Ok(Position::Shortstop),
            "LF" => Ok(Position::LeftField),
            "CF" => Ok(Position::CenterField),
            "RF" => Ok(Position::RightField),
            _ => Err(format!("'{}' is not a valid position label", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_round_trip() {
        for position in Position::DISPLAY_ORDER {
            let parsed = Position::from_str(position.get_short_name()).unwrap();
            assert_eq!(parsed, position);
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!(Position::from_str("DH").is_err());
        assert!(Position::from_str("Inactive").is_err());
    }

    #[test]
    fn test_infield_outfield_partition() {
        let infield: Vec<Position> = Position::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(Position::is_infield)
            .collect();
        let outfield: Vec<Position> = Position::DISPLAY_ORDER
            .iter()
            .copied()
            .filter(Position::is_outfield)
            .collect();

        assert_eq!(infield.len(), 6);
        assert_eq!(
            outfield,
            vec![Position::LeftField, Position::CenterField, Position::RightField]
        );
    }

    #[test]
    fn test_slot_indices_are_distinct() {
        let mut seen = [false; POSITION_COUNT];
        for position in Position::DISPLAY_ORDER {
            assert!(!seen[position.index()]);
            seen[position.index()] = true;
        }
    }
}
