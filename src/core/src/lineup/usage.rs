use crate::roster::Position;

/// The two most recent positions a player has fielded, oldest first. Two
/// fixed slots instead of a growable list: the rotation rule only ever looks
/// back two innings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecentPositions {
    slots: [Option<Position>; 2],
}

impl RecentPositions {
    pub fn push(&mut self, position: Position) {
        self.slots[0] = self.slots[1];
        self.slots[1] = Some(position);
    }

    /// True when both tracked innings were spent at this exact position, which
    /// would make a third assignment three in a row.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.slots == [Some(position), Some(position)]
    }
}

/// Per-player mutable state threaded through a single lineup generation run.
#[derive(Debug, Clone, Default)]
pub struct PlayerUsage {
    pub pitched: u8,
    pub caught: u8,
    pub innings_played: u8,
    pub infield: u8,
    pub outfield: u8,
    pub recent_positions: RecentPositions,
}

impl PlayerUsage {
    pub fn record_assignment(&mut self, position: Position) {
        match position {
            Position::Pitcher => self.pitched += 1,
            Position::Catcher => self.caught += 1,
            _ => {}
        }

        if position.is_infield() {
            self.infield += 1;
        } else {
            self.outfield += 1;
        }

        self.innings_played += 1;
        self.recent_positions.push(position);
    }
}
