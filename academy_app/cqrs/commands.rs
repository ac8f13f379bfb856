use academy_game::models::{
    construction::ConstructionResult,
    player::Player,
    research::{ResearchAction, ResearchResult},
    wizard::Wizard,
};
use academy_types::{common::PlayerId, faction::Faction};

use crate::cqrs::Command;

/// Registers a player with the chosen school and founds their city.
#[derive(Debug, Clone)]
pub struct SelectFaction {
    pub player_id: PlayerId,
    pub username: String,
    pub faction: Faction,
}

impl Command for SelectFaction {
    type Output = Player;
}

/// Builds a new building. Without `cell_index` the first empty cell is used.
#[derive(Debug, Clone)]
pub struct StartConstruction {
    pub player_id: PlayerId,
    pub building_id: String,
    pub cell_index: Option<u8>,
}

impl Command for StartConstruction {
    type Output = ConstructionResult;
}

#[derive(Debug, Clone)]
pub struct StartUpgrade {
    pub player_id: PlayerId,
    pub building_id: String,
    pub target_level: u8,
}

impl Command for StartUpgrade {
    type Output = ConstructionResult;
}

#[derive(Debug, Clone)]
pub struct HireWizard {
    pub player_id: PlayerId,
}

impl Command for HireWizard {
    type Output = Wizard;
}

#[derive(Debug, Clone)]
pub struct StartResearch {
    pub player_id: PlayerId,
    pub action: ResearchAction,
}

impl Command for StartResearch {
    type Output = ResearchResult;
}

#[derive(Debug, Clone)]
pub struct CancelResearch {
    pub player_id: PlayerId,
}

impl Command for CancelResearch {
    type Output = ();
}
