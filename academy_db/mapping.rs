use serde_json::Value;

use academy_game::models::player::Player;
use academy_types::{errors::DbError, faction::Faction};

use crate::models::{self as db_models};

impl From<db_models::Faction> for Faction {
    fn from(faction: db_models::Faction) -> Self {
        match faction {
            db_models::Faction::Fire => Faction::Fire,
            db_models::Faction::Water => Faction::Water,
            db_models::Faction::Wind => Faction::Wind,
            db_models::Faction::Earth => Faction::Earth,
        }
    }
}

impl From<Faction> for db_models::Faction {
    fn from(faction: Faction) -> Self {
        match faction {
            Faction::Fire => db_models::Faction::Fire,
            Faction::Water => db_models::Faction::Water,
            Faction::Wind => db_models::Faction::Wind,
            Faction::Earth => db_models::Faction::Earth,
        }
    }
}

impl TryFrom<db_models::Player> for Player {
    type Error = DbError;

    fn try_from(row: db_models::Player) -> Result<Self, Self::Error> {
        Ok(Player {
            id: row.id,
            username: row.username,
            faction: row.faction.into(),
            buildings: serde_json::from_value(row.buildings)?,
            grid: serde_json::from_value(row.buildings_grid)?,
            construction: serde_json::from_value(row.construction)?,
            spells: serde_json::from_value(row.spells)?,
            available_spells: serde_json::from_value(row.available_spells)?,
            wizards: serde_json::from_value(row.wizards)?,
            research: serde_json::from_value(row.research)?,
            created_at: row.created_at,
        })
    }
}

/// JSONB documents written for a player, in `players` column order.
pub struct PlayerDocuments {
    pub buildings: Value,
    pub buildings_grid: Value,
    pub construction: Value,
    pub spells: Value,
    pub available_spells: Value,
    pub wizards: Value,
    pub research: Value,
}

impl TryFrom<&Player> for PlayerDocuments {
    type Error = DbError;

    fn try_from(player: &Player) -> Result<Self, Self::Error> {
        Ok(PlayerDocuments {
            buildings: serde_json::to_value(&player.buildings)?,
            buildings_grid: serde_json::to_value(&player.grid)?,
            construction: serde_json::to_value(&player.construction)?,
            spells: serde_json::to_value(&player.spells)?,
            available_spells: serde_json::to_value(&player.available_spells)?,
            wizards: serde_json::to_value(&player.wizards)?,
            research: serde_json::to_value(&player.research)?,
        })
    }
}
