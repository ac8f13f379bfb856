use async_trait::async_trait;
use std::sync::Arc;

use academy_game::models::buildings::get_building_data;
use academy_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{
        Query, QueryHandler,
        queries::{BuildingOverview, CityOverview, GetCityOverview},
    },
    uow::UnitOfWork,
};

pub struct GetCityOverviewHandler {}

impl GetCityOverviewHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetCityOverview> for GetCityOverviewHandler {
    async fn handle(
        &self,
        query: GetCityOverview,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<GetCityOverview as Query>::Output, ApplicationError> {
        let player = uow.players().get_by_id(query.player_id).await?;

        let buildings = player
            .buildings
            .iter()
            .map(|(name, owned)| {
                let data = get_building_data(name);
                BuildingOverview {
                    id: *name,
                    name: name.to_string(),
                    emoji: data.emoji,
                    level: owned.level,
                    max_level: data.max_level,
                    cell_index: owned.cell_index,
                }
            })
            .collect();

        Ok(CityOverview {
            player_id: player.id,
            username: player.username,
            faction: player.faction,
            grid: player.grid.cells().to_vec(),
            buildings,
            construction: player.construction,
        })
    }
}

#[cfg(test)]
mod tests {
    use academy_game::test_utils::{PlayerFactoryOptions, player_factory};
    use academy_types::{buildings::BuildingName, errors::DbError};

    use super::*;
    use crate::test_utils::tests::{MockPlayerRepository, MockUnitOfWork};

    #[tokio::test]
    async fn test_city_overview_lists_starting_buildings() {
        let repo = MockPlayerRepository::default();
        let player = player_factory(PlayerFactoryOptions::default());
        repo.insert(player.clone());
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::with_players(repo));
        let config = Arc::new(Config::from_env());

        let overview = GetCityOverviewHandler::new()
            .handle(
                GetCityOverview {
                    player_id: player.id,
                },
                &uow,
                &config,
            )
            .await
            .unwrap();

        assert_eq!(overview.grid.len(), 9);
        assert_eq!(overview.grid[4], Some(BuildingName::Library));
        let tower = overview
            .buildings
            .iter()
            .find(|b| b.id == BuildingName::WizardTower)
            .unwrap();
        assert_eq!(tower.name, "Wizard Tower");
        assert_eq!((tower.level, tower.max_level), (1, 10));
        assert!(!overview.construction.active);
    }

    #[tokio::test]
    async fn test_city_overview_unknown_player() {
        let uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let config = Arc::new(Config::from_env());

        let err = GetCityOverviewHandler::new()
            .handle(GetCityOverview { player_id: 8 }, &uow, &config)
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Db(DbError::PlayerNotFound(8))));
    }
}
