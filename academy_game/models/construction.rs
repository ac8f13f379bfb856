use serde::{Deserialize, Serialize};
use std::fmt;

use academy_types::{buildings::BuildingName, errors::GameError};

use super::{
    buildings::{BuildingData, find_building, get_building_time},
    player::{Player, PlayerBuilding},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructionKind {
    Build,
    Upgrade,
}

/// The single construction slot of a city. `Default` is the inactive sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Construction {
    pub active: bool,
    #[serde(rename = "building_id")]
    pub building: Option<BuildingName>,
    pub target_level: Option<u8>,
    /// Remaining seconds.
    pub time_left: f64,
    pub cell_index: Option<u8>,
    #[serde(rename = "type")]
    pub kind: Option<ConstructionKind>,
}

/// A validated build or upgrade request, ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructionPlan {
    pub building: BuildingName,
    pub target_level: u8,
    pub cell_index: Option<u8>,
    pub kind: ConstructionKind,
    /// Seconds until completion.
    pub duration: f64,
}

impl ConstructionPlan {
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0
    }

    /// Active construction record for a plan that does not complete instantly.
    pub fn to_record(&self) -> Construction {
        Construction {
            active: true,
            building: Some(self.building),
            target_level: Some(self.target_level),
            time_left: self.duration,
            cell_index: self.cell_index,
            kind: Some(self.kind),
        }
    }

    pub fn result(&self) -> ConstructionResult {
        if self.is_instant() {
            ConstructionResult::Completed {
                building: self.building,
                level: self.target_level,
                kind: self.kind,
            }
        } else {
            ConstructionResult::Pending {
                building: self.building,
                level: self.target_level,
                kind: self.kind,
                seconds: self.duration,
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConstructionResult {
    Completed {
        building: BuildingName,
        level: u8,
        kind: ConstructionKind,
    },
    Pending {
        building: BuildingName,
        level: u8,
        kind: ConstructionKind,
        seconds: f64,
    },
}

impl ConstructionResult {
    pub fn building(&self) -> BuildingName {
        match self {
            ConstructionResult::Completed { building, .. }
            | ConstructionResult::Pending { building, .. } => *building,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ConstructionResult::Completed { .. })
    }

    /// User-facing text describing the outcome.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstructionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionResult::Completed {
                building,
                kind: ConstructionKind::Build,
                ..
            } => write!(f, "'{building}' was built instantly!"),
            ConstructionResult::Completed {
                building,
                level,
                kind: ConstructionKind::Upgrade,
            } => write!(f, "'{building}' upgraded to level {level} instantly!"),
            ConstructionResult::Pending {
                building,
                kind: ConstructionKind::Build,
                seconds,
                ..
            } => write!(
                f,
                "Construction of '{building}' started. Time: {seconds:.0} seconds."
            ),
            ConstructionResult::Pending {
                building,
                level,
                kind: ConstructionKind::Upgrade,
                seconds,
            } => write!(
                f,
                "Upgrade of '{building}' to level {level} started. Time: {seconds:.0} seconds."
            ),
        }
    }
}

impl Player {
    /// Checks whether `building_id` may be built right now.
    pub fn can_build(&self, building_id: &str) -> Result<&'static BuildingData, GameError> {
        let data = find_building(building_id)?;
        if !data.can_build {
            return Err(GameError::NotBuildable(data.name));
        }
        if self.construction.active {
            return Err(GameError::ConstructionBusy);
        }
        Ok(data)
    }

    /// Validates a new building on `cell_index` and prepares its construction.
    pub fn plan_construction(
        &self,
        building_id: &str,
        cell_index: u8,
    ) -> Result<ConstructionPlan, GameError> {
        let data = self.can_build(building_id)?;
        // only a placed building counts: an upgrade alone never puts one on the grid
        if data.is_unique && self.grid.cell_of(data.name).is_some() {
            return Err(GameError::BuildingAlreadyBuilt(data.name));
        }
        self.grid.ensure_free(cell_index)?;

        Ok(ConstructionPlan {
            building: data.name,
            target_level: 1,
            cell_index: Some(cell_index),
            kind: ConstructionKind::Build,
            duration: get_building_time(&data.name, None),
        })
    }

    /// Checks whether `building_id` may be upgraded to `target_level` right now.
    /// Only the max level bounds `target_level`: lower levels, 0 included, are accepted.
    pub fn can_upgrade(
        &self,
        building_id: &str,
        target_level: u8,
    ) -> Result<&'static BuildingData, GameError> {
        let data = find_building(building_id)?;
        if target_level > data.max_level {
            return Err(GameError::LevelExceedsMax {
                building: data.name,
                max_level: data.max_level,
            });
        }
        if self.construction.active {
            return Err(GameError::ConstructionBusy);
        }
        Ok(data)
    }

    pub fn plan_upgrade(
        &self,
        building_id: &str,
        target_level: u8,
    ) -> Result<ConstructionPlan, GameError> {
        let data = self.can_upgrade(building_id, target_level)?;
        Ok(ConstructionPlan {
            building: data.name,
            target_level,
            cell_index: None,
            kind: ConstructionKind::Upgrade,
            duration: get_building_time(&data.name, Some(target_level)),
        })
    }

    /// Occupies the construction slot unless it is already taken.
    pub fn set_construction_if_idle(&mut self, construction: Construction) -> bool {
        if self.construction.active {
            return false;
        }
        self.construction = construction;
        true
    }

    /// Completes a construction: sets the building level, moves it to
    /// `cell_index` when given and frees the construction slot.
    pub fn finish_construction(
        &mut self,
        building: BuildingName,
        target_level: u8,
        cell_index: Option<u8>,
    ) -> Result<(), GameError> {
        let previous_cell = self.buildings.get(&building).and_then(|b| b.cell_index);

        if let Some(cell) = cell_index {
            match self.grid.get(cell)? {
                Some(occupant) if occupant != building => {
                    return Err(GameError::CellOccupied {
                        cell_index: cell,
                        occupant,
                    });
                }
                _ => {}
            }
            if let Some(old) = previous_cell.filter(|old| *old != cell) {
                self.grid.clear(old);
            }
            self.grid.place(cell, building)?;
        }

        self.buildings.insert(
            building,
            PlayerBuilding {
                level: target_level,
                cell_index: cell_index.or(previous_cell),
            },
        );
        self.construction = Construction::default();
        Ok(())
    }
}
