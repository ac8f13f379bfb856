use serde::Serialize;

use academy_game::models::{construction::Construction, player::Player};
use academy_types::{buildings::BuildingName, common::PlayerId, faction::Faction};

use crate::cqrs::Query;

pub struct GetPlayerById {
    pub player_id: PlayerId,
}

impl Query for GetPlayerById {
    type Output = Player;
}

/// What the city screen shows: the grid, owned buildings and the construction slot.
pub struct GetCityOverview {
    pub player_id: PlayerId,
}

impl Query for GetCityOverview {
    type Output = CityOverview;
}

#[derive(Debug, Clone, Serialize)]
pub struct CityOverview {
    pub player_id: PlayerId,
    pub username: String,
    pub faction: Faction,
    pub grid: Vec<Option<BuildingName>>,
    pub buildings: Vec<BuildingOverview>,
    pub construction: Construction,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildingOverview {
    pub id: BuildingName,
    pub name: String,
    pub emoji: &'static str,
    pub level: u8,
    pub max_level: u8,
    pub cell_index: Option<u8>,
}
