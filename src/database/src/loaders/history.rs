use crate::error::{LoadError, LoadResult};
use core::{GameLog, INACTIVE_LABEL, PositionEntry, PositionHistory};
use log::debug;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

pub struct HistoryLoader;

impl HistoryLoader {
    pub fn load(path: &Path) -> LoadResult<PositionHistory> {
        let raw = fs::read_to_string(path)?;

        Self::from_json(&raw)
    }

    /// The file maps game id -> position label -> player -> innings, with the
    /// reserved "Inactive" label holding a name list instead. BTreeMaps keep
    /// the converted game and entry order independent of file key order.
    pub fn from_json(raw: &str) -> LoadResult<PositionHistory> {
        let entities: BTreeMap<String, BTreeMap<String, Value>> = serde_json::from_str(raw)?;

        let mut games: Vec<GameLog> = Vec::with_capacity(entities.len());

        for (game_id, labels) in entities {
            let mut entries: Vec<PositionEntry> = Vec::new();
            let mut inactive: HashSet<String> = HashSet::new();

            for (label, value) in labels {
                if label == INACTIVE_LABEL {
                    inactive = Self::parse_inactive_names(&game_id, &value)?;
                } else {
                    entries.push(PositionEntry {
                        label: label.clone(),
                        innings: Self::parse_innings(&game_id, &label, &value)?,
                    });
                }
            }

            games.push(GameLog {
                id: game_id,
                entries,
                inactive,
            });
        }

        debug!("loaded position history for {} games", games.len());

        Ok(PositionHistory::new(games))
    }

    fn parse_inactive_names(game_id: &str, value: &Value) -> LoadResult<HashSet<String>> {
        let names = value.as_array().ok_or_else(|| {
            LoadError::MalformedInput(format!(
                "'{}' entry of game '{}' must be a list of names",
                INACTIVE_LABEL, game_id
            ))
        })?;

        names
            .iter()
            .map(|name| {
                name.as_str().map(String::from).ok_or_else(|| {
                    LoadError::MalformedInput(format!(
                        "non-string name in '{}' entry of game '{}'",
                        INACTIVE_LABEL, game_id
                    ))
                })
            })
            .collect()
    }

    fn parse_innings(game_id: &str, label: &str, value: &Value) -> LoadResult<HashMap<String, u32>> {
        let logged = value.as_object().ok_or_else(|| {
            LoadError::MalformedInput(format!(
                "'{}' entry of game '{}' must map players to innings",
                label, game_id
            ))
        })?;

        logged
            .iter()
            .map(|(player_name, innings)| {
                let innings = innings.as_u64().ok_or_else(|| {
                    LoadError::MalformedInput(format!(
                        "non-numeric innings for '{}' at '{}' in game '{}'",
                        player_name, label, game_id
                    ))
                })?;

                Ok((player_name.clone(), innings as u32))
            })
            .collect()
    }
}
