use std::sync::Arc;
use tracing::instrument;

use academy_game::models::construction::ConstructionResult;
use academy_types::errors::ApplicationError;

use super::helpers::commit_construction;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::StartUpgrade},
    uow::UnitOfWork,
};

pub struct StartUpgradeCommandHandler {}

impl Default for StartUpgradeCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StartUpgradeCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<StartUpgrade> for StartUpgradeCommandHandler {
    #[instrument(skip_all, fields(
        player_id = command.player_id,
        building = %command.building_id,
        target_level = command.target_level
    ))]
    async fn handle(
        &self,
        command: StartUpgrade,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<ConstructionResult, ApplicationError> {
        let repo = uow.players();
        let player = repo.get_by_id(command.player_id).await?;

        let plan = player.plan_upgrade(&command.building_id, command.target_level)?;

        commit_construction(&repo, player.id, &plan).await
    }
}
