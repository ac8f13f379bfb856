use std::sync::Arc;
use tracing::{info, instrument};

use academy_game::models::player::Player;
use academy_types::errors::ApplicationError;

use super::helpers::write_failure;
use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::SelectFaction},
    uow::UnitOfWork,
};

pub struct SelectFactionCommandHandler {}

impl Default for SelectFactionCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectFactionCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<SelectFaction> for SelectFactionCommandHandler {
    #[instrument(skip_all, fields(player_id = command.player_id, faction = %command.faction))]
    async fn handle(
        &self,
        command: SelectFaction,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<Player, ApplicationError> {
        let player = Player::new(command.player_id, command.username, command.faction);
        uow.players().create(&player).await.map_err(write_failure)?;

        info!("player registered");
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use academy_types::{buildings::BuildingName, errors::DbError, faction::Faction};

    use super::*;
    use crate::test_utils::tests::{MockPlayerRepository, MockUnitOfWork};

    fn select(player_id: i64, faction: Faction) -> SelectFaction {
        SelectFaction {
            player_id,
            username: "merlin".to_string(),
            faction,
        }
    }

    #[tokio::test]
    async fn test_select_faction_creates_starting_city() {
        let repo = MockPlayerRepository::default();
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::with_players(repo.clone()));
        let config = Arc::new(Config::from_env());

        let player = SelectFactionCommandHandler::new()
            .handle(select(77, Faction::Fire), &uow, &config)
            .await
            .unwrap();

        let saved = repo.get(77).unwrap();
        assert_eq!(saved.faction, Faction::Fire);
        assert_eq!(saved.wizards.len(), 1);
        let spark = saved.learned_spell(Faction::Fire, "spark").unwrap();
        assert_eq!((spark.level, spark.tier), (1, 1));
        assert_eq!(saved.grid.get(4).unwrap(), Some(BuildingName::Library));
        assert_eq!(saved.grid.get(6).unwrap(), Some(BuildingName::WizardTower));
        assert!(!saved.construction.active);
        assert_eq!(player.id, saved.id);
    }

    #[tokio::test]
    async fn test_select_faction_twice_fails() {
        let repo = MockPlayerRepository::default();
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::with_players(repo.clone()));
        let config = Arc::new(Config::from_env());
        let handler = SelectFactionCommandHandler::new();

        handler
            .handle(select(5, Faction::Water), &uow, &config)
            .await
            .unwrap();
        let err = handler
            .handle(select(5, Faction::Earth), &uow, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::Db(DbError::PlayerAlreadyExists(5))));
        assert_eq!(repo.get(5).unwrap().faction, Faction::Water);
    }
}
