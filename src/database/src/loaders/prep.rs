use crate::error::{LoadError, LoadResult};
use core::GamePrep;
use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const INNING_KEY_PREFIX: &str = "Inning ";

#[derive(Deserialize, Default)]
pub struct GamePrepEntity {
    #[serde(rename = "Pitching Plan", default)]
    pub pitching_plan: HashMap<String, String>,
    #[serde(rename = "Inning Availability", default)]
    pub inning_availability: InningAvailabilityEntity,
}

#[derive(Deserialize, Default)]
pub struct InningAvailabilityEntity {
    #[serde(rename = "Inactive Entire Game", default)]
    pub inactive_entire_game: Vec<String>,
    #[serde(rename = "Partial Inactivity", default)]
    pub partial_inactivity: HashMap<String, Vec<u8>>,
}

pub struct GamePrepLoader;

impl GamePrepLoader {
    pub fn load(path: &Path) -> LoadResult<GamePrep> {
        let raw = fs::read_to_string(path)?;

        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> LoadResult<GamePrep> {
        let entity: GamePrepEntity = serde_json::from_str(raw)?;

        let mut pitching_plan: HashMap<u8, String> = HashMap::new();

        for (key, pitcher_name) in entity.pitching_plan {
            let inning = Self::parse_inning_key(&key)?;
            pitching_plan.insert(inning, pitcher_name);
        }

        debug!(
            "loaded game prep: {} planned pitchers, {} inactive, {} partially inactive",
            pitching_plan.len(),
            entity.inning_availability.inactive_entire_game.len(),
            entity.inning_availability.partial_inactivity.len()
        );

        Ok(GamePrep {
            pitching_plan,
            inactive_entire_game: entity
                .inning_availability
                .inactive_entire_game
                .into_iter()
                .collect(),
            partial_inactivity: entity.inning_availability.partial_inactivity,
        })
    }

    /// Pitching plan entries are keyed "Inning 1", "Inning 2", ...
    fn parse_inning_key(key: &str) -> LoadResult<u8> {
        key.strip_prefix(INNING_KEY_PREFIX)
            .and_then(|number| number.parse().ok())
            .ok_or_else(|| {
                LoadError::MalformedInput(format!("invalid pitching plan key '{}'", key))
            })
    }
}
