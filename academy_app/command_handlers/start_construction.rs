use std::sync::Arc;
use tracing::instrument;

use academy_game::models::construction::ConstructionResult;
use academy_types::errors::{ApplicationError, GameError};

use super::helpers::commit_construction;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::StartConstruction},
    uow::UnitOfWork,
};

pub struct StartConstructionCommandHandler {}

impl Default for StartConstructionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StartConstructionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<StartConstruction> for StartConstructionCommandHandler {
    #[instrument(skip_all, fields(player_id = command.player_id, building = %command.building_id))]
    async fn handle(
        &self,
        command: StartConstruction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<ConstructionResult, ApplicationError> {
        let repo = uow.players();
        let player = repo.get_by_id(command.player_id).await?;

        player.can_build(&command.building_id)?;
        let cell_index = match command.cell_index {
            Some(cell) => cell,
            None => player.grid.first_empty().ok_or(GameError::NoFreeCells)?,
        };
        let plan = player.plan_construction(&command.building_id, cell_index)?;

        commit_construction(&repo, player.id, &plan).await
    }
}
