use academy_game::models::{
    construction::Construction, player::Player, research::Research, wizard::Wizard,
};
use academy_types::{buildings::BuildingName, common::PlayerId, errors::ApplicationError};

#[async_trait::async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Returns a player by id, `DbError::PlayerNotFound` when unknown.
    async fn get_by_id(&self, player_id: PlayerId) -> Result<Player, ApplicationError>;

    /// Stores a brand new player, `DbError::PlayerAlreadyExists` when the id is taken.
    async fn create(&self, player: &Player) -> Result<(), ApplicationError>;

    /// Overwrites the whole player state.
    async fn save(&self, player: &Player) -> Result<(), ApplicationError>;

    async fn set_construction(
        &self,
        player_id: PlayerId,
        construction: &Construction,
    ) -> Result<(), ApplicationError>;

    /// Stores `construction` only if no construction is active.
    /// Returns false, writing nothing, when the slot is taken.
    async fn set_construction_if_idle(
        &self,
        player_id: PlayerId,
        construction: &Construction,
    ) -> Result<bool, ApplicationError>;

    /// Sets the building level (and cell, updating the grid) and frees the
    /// construction slot in a single write.
    async fn finish_construction(
        &self,
        player_id: PlayerId,
        building: BuildingName,
        target_level: u8,
        cell_index: Option<u8>,
    ) -> Result<(), ApplicationError>;

    async fn update_research(
        &self,
        player_id: PlayerId,
        research: &Research,
    ) -> Result<(), ApplicationError>;

    async fn add_wizard(&self, player_id: PlayerId, wizard: &Wizard)
    -> Result<(), ApplicationError>;
}
