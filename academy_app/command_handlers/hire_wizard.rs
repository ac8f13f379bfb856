use std::sync::Arc;
use tracing::{info, instrument};

use academy_game::models::wizard::Wizard;
use academy_types::errors::ApplicationError;

use super::helpers::write_failure;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::HireWizard},
    uow::UnitOfWork,
};

pub struct HireWizardCommandHandler {}

impl Default for HireWizardCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl HireWizardCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<HireWizard> for HireWizardCommandHandler {
    #[instrument(skip_all, fields(player_id = command.player_id))]
    async fn handle(
        &self,
        command: HireWizard,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Wizard, ApplicationError> {
        let repo = uow.players();
        let player = repo.get_by_id(command.player_id).await?;

        let wizard = player.next_wizard();
        repo.add_wizard(player.id, &wizard)
            .await
            .map_err(write_failure)?;

        info!(wizard = %wizard.id, "wizard hired");
        Ok(wizard)
    }
}
