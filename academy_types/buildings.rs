use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::GameError;

/// Every building that can stand in a player's city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildingName {
    Library,
    WizardTower,
    BlessingTower,
    AomGenerator,
    PvpArena,
    DefenseTower,
    ArcaneLab,
}

impl BuildingName {
    pub const ALL: [BuildingName; 7] = [
        BuildingName::Library,
        BuildingName::WizardTower,
        BuildingName::BlessingTower,
        BuildingName::AomGenerator,
        BuildingName::PvpArena,
        BuildingName::DefenseTower,
        BuildingName::ArcaneLab,
    ];

    /// Identifier used in storage, commands and the web client.
    pub fn id(&self) -> &'static str {
        match self {
            BuildingName::Library => "library",
            BuildingName::WizardTower => "wizard_tower",
            BuildingName::BlessingTower => "blessing_tower",
            BuildingName::AomGenerator => "aom_generator",
            BuildingName::PvpArena => "pvp_arena",
            BuildingName::DefenseTower => "defense_tower",
            BuildingName::ArcaneLab => "arcane_lab",
        }
    }
}

impl fmt::Display for BuildingName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildingName::Library => "Library",
            BuildingName::WizardTower => "Wizard Tower",
            BuildingName::BlessingTower => "Blessing Tower",
            BuildingName::AomGenerator => "AOM Generator",
            BuildingName::PvpArena => "PvP Arena",
            BuildingName::DefenseTower => "Defense Tower",
            BuildingName::ArcaneLab => "Arcane Lab",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for BuildingName {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildingName::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| GameError::BuildingNotFound(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_name_ids_round_trip_through_from_str() {
        for name in BuildingName::ALL {
            assert_eq!(name.id().parse::<BuildingName>().unwrap(), name);
        }
    }

    #[test]
    fn test_unknown_building_id() {
        let err = "castle".parse::<BuildingName>().unwrap_err();
        assert!(matches!(err, GameError::BuildingNotFound(ref id) if id == "castle"));
    }

    #[test]
    fn test_serde_matches_ids() {
        let json = serde_json::to_string(&BuildingName::AomGenerator).unwrap();
        assert_eq!(json, "\"aom_generator\"");
    }
}
