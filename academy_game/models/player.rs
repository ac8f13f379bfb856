use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use academy_types::{buildings::BuildingName, common::PlayerId, faction::Faction};

use super::{
    buildings::starting_buildings, construction::Construction, grid::CityGrid,
    research::Research, spells::starting_spell, wizard::Wizard,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBuilding {
    pub level: u8,
    pub cell_index: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedSpell {
    pub name: String,
    pub level: u8,
    pub tier: u8,
}

/// Learned spells per school, keyed by spell id.
pub type SpellBook = BTreeMap<Faction, BTreeMap<String, LearnedSpell>>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub username: String,
    pub faction: Faction,
    pub buildings: BTreeMap<BuildingName, PlayerBuilding>,
    pub grid: CityGrid,
    pub construction: Construction,
    pub spells: SpellBook,
    pub available_spells: Vec<String>,
    pub wizards: Vec<Wizard>,
    pub research: Research,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Founds a new city for a player who just picked `faction`.
    pub fn new(id: PlayerId, username: String, faction: Faction) -> Self {
        let grid = CityGrid::founded();
        let buildings = starting_buildings()
            .map(|data| {
                (
                    data.name,
                    PlayerBuilding {
                        level: 1,
                        cell_index: grid.cell_of(data.name),
                    },
                )
            })
            .collect();

        let spell = starting_spell(faction);
        let mut spells: SpellBook = Faction::ALL
            .into_iter()
            .map(|f| (f, BTreeMap::new()))
            .collect();
        spells.entry(faction).or_default().insert(
            spell.id.to_string(),
            LearnedSpell {
                name: spell.name.to_string(),
                level: 1,
                tier: 1,
            },
        );

        Self {
            id,
            username,
            faction,
            buildings,
            grid,
            construction: Construction::default(),
            spells,
            available_spells: vec![spell.id.to_string()],
            wizards: vec![Wizard::novice(faction, spell.id)],
            research: Research::default(),
            created_at: Utc::now(),
        }
    }

    /// Current level of `building`, 0 when not built.
    pub fn building_level(&self, building: BuildingName) -> u8 {
        self.buildings.get(&building).map_or(0, |b| b.level)
    }

    pub fn learned_spell(&self, faction: Faction, spell_id: &str) -> Option<&LearnedSpell> {
        self.spells.get(&faction).and_then(|book| book.get(spell_id))
    }

    /// Every grid cell points to an owned building and every placed building
    /// sits on the cell it records.
    pub fn grid_is_consistent(&self) -> bool {
        let cells_match = self.grid.occupied().all(|(cell, building)| {
            self.buildings
                .get(&building)
                .is_some_and(|b| b.cell_index == Some(cell))
        });
        let buildings_match = self.buildings.iter().all(|(name, b)| match b.cell_index {
            Some(cell) => self.grid.get(cell).ok().flatten() == Some(*name),
            None => true,
        });
        cells_match && buildings_match
    }
}
