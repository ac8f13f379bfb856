use serde::{Deserialize, Serialize};

use academy_types::{buildings::BuildingName, common::GRID_CELLS, errors::GameError};

use super::buildings::starting_buildings;

/// The 3x3 city layout: which building stands on each cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityGrid([Option<BuildingName>; GRID_CELLS as usize]);

impl CityGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout of a newly founded city: every starting building on its cell.
    pub fn founded() -> Self {
        let mut grid = Self::new();
        for data in starting_buildings() {
            if let Some(cell_index) = data.starting_cell {
                if let Some(cell) = grid.0.get_mut(cell_index as usize) {
                    *cell = Some(data.name);
                }
            }
        }
        grid
    }

    /// Returns the building on `cell_index`, if any.
    pub fn get(&self, cell_index: u8) -> Result<Option<BuildingName>, GameError> {
        self.0
            .get(cell_index as usize)
            .copied()
            .ok_or(GameError::CellOutOfBounds(cell_index))
    }

    /// Fails unless `cell_index` exists and is empty.
    pub fn ensure_free(&self, cell_index: u8) -> Result<(), GameError> {
        match self.get(cell_index)? {
            Some(occupant) => Err(GameError::CellOccupied {
                cell_index,
                occupant,
            }),
            None => Ok(()),
        }
    }

    pub fn place(&mut self, cell_index: u8, building: BuildingName) -> Result<(), GameError> {
        let cell = self
            .0
            .get_mut(cell_index as usize)
            .ok_or(GameError::CellOutOfBounds(cell_index))?;
        *cell = Some(building);
        Ok(())
    }

    pub fn clear(&mut self, cell_index: u8) {
        if let Some(cell) = self.0.get_mut(cell_index as usize) {
            *cell = None;
        }
    }

    pub fn first_empty(&self) -> Option<u8> {
        self.0.iter().position(Option::is_none).map(|idx| idx as u8)
    }

    pub fn cell_of(&self, building: BuildingName) -> Option<u8> {
        self.0
            .iter()
            .position(|cell| *cell == Some(building))
            .map(|idx| idx as u8)
    }

    pub fn cells(&self) -> &[Option<BuildingName>] {
        &self.0
    }

    /// Occupied cells as `(cell_index, building)`.
    pub fn occupied(&self) -> impl Iterator<Item = (u8, BuildingName)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.map(|b| (idx as u8, b)))
    }
}
