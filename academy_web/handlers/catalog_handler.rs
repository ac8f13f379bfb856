use axum::Json;
use serde::Serialize;

use academy_game::models::{
    buildings::{BuildingData, BuildingEffects, all_buildings},
    spells::{SpellData, faction_spells, hybrid_spells},
};
use academy_types::{buildings::BuildingName, faction::Faction};

#[derive(Debug, Serialize)]
pub struct BuildingCatalogEntry {
    pub id: BuildingName,
    pub name: String,
    pub description: &'static str,
    pub emoji: &'static str,
    pub is_unique: bool,
    pub is_starting: bool,
    pub can_build: bool,
    pub max_level: u8,
    pub build_time: f64,
    pub upgrade_times: &'static [f64],
    pub effects: BuildingEffects,
}

impl From<&'static BuildingData> for BuildingCatalogEntry {
    fn from(data: &'static BuildingData) -> Self {
        Self {
            id: data.name,
            name: data.name.to_string(),
            description: data.description,
            emoji: data.emoji,
            is_unique: data.is_unique,
            is_starting: data.is_starting,
            can_build: data.can_build,
            max_level: data.max_level,
            build_time: data.costs.build_time,
            upgrade_times: data.costs.upgrade_times(),
            effects: data.effects.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FactionSpells {
    pub faction: Faction,
    pub emoji: &'static str,
    pub color: &'static str,
    pub spells: &'static [SpellData],
}

#[derive(Debug, Serialize)]
pub struct HybridSpell {
    pub factions: [Faction; 2],
    pub spell: &'static SpellData,
}

#[derive(Debug, Serialize)]
pub struct SpellCatalog {
    pub factions: Vec<FactionSpells>,
    pub hybrids: Vec<HybridSpell>,
}

/// `GET /api/catalog/buildings`
pub async fn buildings_catalog() -> Json<Vec<BuildingCatalogEntry>> {
    Json(all_buildings().map(BuildingCatalogEntry::from).collect())
}

/// `GET /api/catalog/spells`
pub async fn spells_catalog() -> Json<SpellCatalog> {
    let factions = Faction::ALL
        .into_iter()
        .map(|faction| FactionSpells {
            faction,
            emoji: faction.emoji(),
            color: faction.color(),
            spells: faction_spells(faction),
        })
        .collect();

    let hybrids = hybrid_spells()
        .map(|(pair, spell)| {
            let (a, b) = pair.factions();
            HybridSpell {
                factions: [a, b],
                spell,
            }
        })
        .collect();

    Json(SpellCatalog { factions, hybrids })
}
