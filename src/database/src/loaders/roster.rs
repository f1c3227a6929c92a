use crate::error::{LoadError, LoadResult};
use core::{Player, Position};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Roster files may use this alias instead of spelling out the three
/// outfield spots.
const OUTFIELD_ALIAS: &str = "OF";

#[derive(Deserialize)]
pub struct RosterEntity {
    pub players: Vec<PlayerEntity>,
}

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub name: String,
    pub positions: Vec<String>,
}

pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Player>> {
        let raw = fs::read_to_string(path)?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> LoadResult<Vec<Player>> {
        let entity: RosterEntity = serde_json::from_str(raw)?;

        let mut players: Vec<Player> = Vec::with_capacity(entity.players.len());

        for player_entity in entity.players {
            if players.iter().any(|p| p.name == player_entity.name) {
                return Err(LoadError::MalformedInput(format!(
                    "duplicate player name '{}'",
                    player_entity.name
                )));
            }

            let positions = Self::parse_positions(&player_entity)?;
            players.push(Player::new(&player_entity.name, positions));
        }

        debug!("loaded roster of {} players", players.len());

        Ok(players)
    }

    fn parse_positions(player_entity: &PlayerEntity) -> LoadResult<Vec<Position>> {
        let mut positions: Vec<Position> = Vec::new();

        for label in &player_entity.positions {
            let expanded: &[Position] = if label == OUTFIELD_ALIAS {
                &[Position::LeftField, Position::CenterField, Position::RightField]
            } else {
                match Position::from_str(label) {
                    Ok(position) => &[position],
                    Err(_) => {
                        return Err(LoadError::MalformedInput(format!(
                            "unknown position '{}' for player '{}'",
                            label, player_entity.name
                        )));
                    }
                }
            };

            for &position in expanded {
                if !positions.contains(&position) {
                    positions.push(position);
                }
            }
        }

        Ok(positions)
    }
}
