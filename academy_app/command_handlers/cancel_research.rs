use std::sync::Arc;
use tracing::{info, instrument};

use academy_types::errors::ApplicationError;

use super::helpers::write_failure;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CancelResearch},
    uow::UnitOfWork,
};

pub struct CancelResearchCommandHandler {}

impl Default for CancelResearchCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelResearchCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CancelResearch> for CancelResearchCommandHandler {
    #[instrument(skip_all, fields(player_id = command.player_id))]
    async fn handle(
        &self,
        command: CancelResearch,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let repo = uow.players();
        let mut player = repo.get_by_id(command.player_id).await?;

        player.cancel_research()?;
        repo.update_research(player.id, &player.research)
            .await
            .map_err(write_failure)?;

        info!("research cancelled");
        Ok(())
    }
}
