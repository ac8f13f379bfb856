use std::sync::Arc;
use tracing::error;

use academy_types::{
    common::PlayerId,
    errors::{AppError, ApplicationError},
};

use crate::{
    command_handlers::{StartConstructionCommandHandler, StartUpgradeCommandHandler},
    config::Config,
    cqrs::{
        Command, CommandHandler, Query, QueryHandler,
        commands::{StartConstruction, StartUpgrade},
    },
    outcome::ActionOutcome,
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
#[derive(Clone)]
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Executes a command.
    /// - It begins a Unit of Work.
    /// - It passes the UoW to the handler.
    /// - If the handler succeeds, it commits the UoW.
    /// - If the handler fails, it rolls back the UoW.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<C::Output, ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(output) => {
                uow.commit().await.map_err(|e| {
                    error!(error = %e, "commit failed");
                    ApplicationError::App(AppError::PersistenceWriteFailed(e.to_string()))
                })?;
                Ok(output)
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Executes a query.
    /// This method ensures the transaction is *always* rolled back.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;

        let result = handler.handle(query, &uow, &self.config).await;

        // Always rollback a query, as it should never write data.
        uow.rollback().await?;

        result
    }

    /// Builds `building_id` for a player, on `cell_index` or the first empty cell.
    pub async fn start_construction(
        &self,
        player_id: PlayerId,
        building_id: &str,
        cell_index: Option<u8>,
    ) -> ActionOutcome {
        let command = StartConstruction {
            player_id,
            building_id: building_id.to_string(),
            cell_index,
        };
        ActionOutcome::from_result(
            self.execute(command, StartConstructionCommandHandler::new())
                .await,
        )
    }

    /// Upgrades `building_id` of a player to `target_level`.
    pub async fn start_upgrade(
        &self,
        player_id: PlayerId,
        building_id: &str,
        target_level: u8,
    ) -> ActionOutcome {
        let command = StartUpgrade {
            player_id,
            building_id: building_id.to_string(),
            target_level,
        };
        ActionOutcome::from_result(self.execute(command, StartUpgradeCommandHandler::new()).await)
    }
}

#[cfg(test)]
mod tests {
    use academy_game::test_utils::{PlayerFactoryOptions, player_factory};
    use academy_types::buildings::BuildingName;

    use super::*;
    use crate::{
        command_handlers::HireWizardCommandHandler, cqrs::commands::HireWizard,
        test_utils::tests::MockUnitOfWorkProvider,
    };

    fn bus_with(provider: &Arc<MockUnitOfWorkProvider>) -> AppBus {
        AppBus::new(Arc::new(Config::from_env()), provider.clone())
    }

    #[tokio::test]
    async fn test_execute_commits_on_success() {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let player = player_factory(PlayerFactoryOptions::default());
        provider.players().insert(player.clone());
        let bus = bus_with(&provider);

        let outcome = bus.start_construction(player.id, "aom_generator", Some(2)).await;

        assert!(outcome.success, "{}", outcome.message);
        assert!(outcome.message.contains("AOM Generator"));
        assert_eq!(provider.commits(), 1);
        assert_eq!(provider.rollbacks(), 0);

        let stored = provider.players().get(player.id).unwrap();
        assert_eq!(stored.building_level(BuildingName::AomGenerator), 1);
        assert_eq!(stored.grid.get(2).unwrap(), Some(BuildingName::AomGenerator));
        assert!(!stored.construction.active);
    }

    #[tokio::test]
    async fn test_execute_rolls_back_on_failure() {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let player = player_factory(PlayerFactoryOptions::default());
        provider.players().insert(player.clone());
        let bus = bus_with(&provider);

        let outcome = bus.start_upgrade(player.id, "wizard_tower", 11).await;

        assert!(!outcome.success);
        assert!(outcome.message.contains("10"));
        assert_eq!(provider.commits(), 0);
        assert_eq!(provider.rollbacks(), 1);

        let stored = provider.players().get(player.id).unwrap();
        assert_eq!(stored.building_level(BuildingName::WizardTower), 1);
    }

    #[tokio::test]
    async fn test_unknown_player_is_reported() {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let bus = bus_with(&provider);

        let outcome = bus.start_construction(404, "arcane_lab", None).await;
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Player 404 not found");
    }

    #[tokio::test]
    async fn test_write_failure_is_reported_once() {
        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let player = player_factory(PlayerFactoryOptions::default());
        provider.players().insert(player.clone());
        provider.players().fail_writes(true);
        let bus = bus_with(&provider);

        let result = bus
            .execute(HireWizard { player_id: player.id }, HireWizardCommandHandler::new())
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::App(AppError::PersistenceWriteFailed(_)))
        ));
        assert_eq!(provider.players().write_attempts(), 1);
        assert_eq!(provider.rollbacks(), 1);
    }

    #[tokio::test]
    async fn test_query_always_rolls_back() {
        use crate::{cqrs::queries::GetPlayerById, queries_handlers::GetPlayerByIdHandler};

        let provider = Arc::new(MockUnitOfWorkProvider::new());
        let player = player_factory(PlayerFactoryOptions::default());
        provider.players().insert(player.clone());
        let bus = bus_with(&provider);

        let found = bus
            .query(
                GetPlayerById {
                    player_id: player.id,
                },
                GetPlayerByIdHandler::new(),
            )
            .await
            .unwrap();
        assert_eq!(found.id, player.id);
        assert_eq!(provider.commits(), 0);
        assert_eq!(provider.rollbacks(), 1);

        let err = bus
            .query(GetPlayerById { player_id: 1 }, GetPlayerByIdHandler::new())
            .await
            .unwrap_err();
        assert!(err.is_rejection());
    }
}
