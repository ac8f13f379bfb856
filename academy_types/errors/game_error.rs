use thiserror::Error;

use crate::{buildings::BuildingName, faction::Faction};

/// Errors for domain logic (game rules).
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Building '{0}' not found")]
    BuildingNotFound(String),

    #[error("'{0}' can't be built")]
    NotBuildable(BuildingName),

    #[error("Maximum level for '{building}' is {max_level}")]
    LevelExceedsMax {
        building: BuildingName,
        max_level: u8,
    },

    #[error("Another construction is already in progress, wait for it to finish")]
    ConstructionBusy,

    #[error("'{0}' is already built")]
    BuildingAlreadyBuilt(BuildingName),

    #[error("Cell {0} is outside the city grid")]
    CellOutOfBounds(u8),

    #[error("Cell {cell_index} is already occupied by '{occupant}'")]
    CellOccupied {
        cell_index: u8,
        occupant: BuildingName,
    },

    #[error("There are no free cells left in the city")]
    NoFreeCells,

    #[error("Unknown faction '{0}'")]
    UnknownFaction(String),

    #[error("Spell '{0}' not found")]
    SpellNotFound(String),

    #[error("There's no hybrid spell combining {0} and {1}")]
    HybridSpellNotFound(Faction, Faction),

    #[error("Spell tier {0} doesn't exist")]
    InvalidSpellTier(u8),

    #[error("Spell '{0}' is already learned")]
    SpellAlreadyLearned(String),

    #[error("Spell '{0}' hasn't been learned yet")]
    SpellNotLearned(String),

    #[error("'{spell}' already reached max level {max_level}")]
    SpellMaxLevelReached { spell: String, max_level: u8 },

    #[error("Another research is already in progress")]
    ResearchBusy,

    #[error("There's no active research to cancel")]
    NoActiveResearch,
}
