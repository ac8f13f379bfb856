use std::sync::Arc;
use tracing::{info, instrument};

use academy_game::models::research::ResearchResult;
use academy_types::errors::ApplicationError;

use super::helpers::write_failure;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::StartResearch},
    uow::UnitOfWork,
};

pub struct StartResearchCommandHandler {}

impl Default for StartResearchCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl StartResearchCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<StartResearch> for StartResearchCommandHandler {
    #[instrument(skip_all, fields(player_id = command.player_id, spell = command.action.spell_id()))]
    async fn handle(
        &self,
        command: StartResearch,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<ResearchResult, ApplicationError> {
        let repo = uow.players();
        let mut player = repo.get_by_id(command.player_id).await?;

        let plan = player.plan_research(&command.action)?;
        let result = player.start_research(&plan);
        repo.save(&player).await.map_err(write_failure)?;

        info!(level = result.level, completed = result.completed, "research committed");
        Ok(result)
    }
}
