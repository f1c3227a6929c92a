use serde::Serialize;

/// Innings a player ended up with across one generated game, split by the
/// infield/outfield partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameSummary {
    pub player_name: String,
    pub innings_played: u8,
    pub infield: u8,
    pub outfield: u8,
}

impl PlayerGameSummary {
    pub fn new(player_name: &str) -> Self {
        PlayerGameSummary {
            player_name: String::from(player_name),
            innings_played: 0,
            infield: 0,
            outfield: 0,
        }
    }
}
