mod test_utils;

use academy_app::{
    command_handlers::{
        CancelResearchCommandHandler, HireWizardCommandHandler, SelectFactionCommandHandler,
        StartConstructionCommandHandler, StartResearchCommandHandler,
    },
    cqrs::{
        commands::{CancelResearch, HireWizard, SelectFaction, StartConstruction, StartResearch},
        queries::GetPlayerById,
    },
    queries_handlers::GetPlayerByIdHandler,
    repository::PlayerRepository,
};
use academy_game::models::{
    construction::{Construction, ConstructionResult},
    research::{Research, ResearchAction},
};
use academy_types::{
    Result,
    buildings::BuildingName,
    errors::{ApplicationError, DbError, GameError},
    faction::Faction,
};

use crate::test_utils::tests::{register_player, setup_app};

#[tokio::test]
async fn test_new_fire_player_starting_state() -> Result<()> {
    let (app_bus, _) = setup_app();
    let player = register_player(&app_bus, Faction::Fire).await?;

    let player = app_bus
        .query(
            GetPlayerById {
                player_id: player.id,
            },
            GetPlayerByIdHandler::new(),
        )
        .await?;

    assert_eq!(player.faction, Faction::Fire);
    assert_eq!(player.wizards.len(), 1);

    let learned: Vec<_> = player.spells.values().flat_map(|book| book.iter()).collect();
    assert_eq!(learned.len(), 1);
    let (spell_id, spell) = learned[0];
    assert_eq!(spell_id, "spark");
    assert_eq!((spell.level, spell.tier), (1, 1));

    assert_eq!(player.building_level(BuildingName::Library), 1);
    assert_eq!(player.building_level(BuildingName::WizardTower), 1);
    assert_eq!(player.grid.get(4)?, Some(BuildingName::Library));
    assert_eq!(player.grid.get(6)?, Some(BuildingName::WizardTower));
    assert_eq!(player.construction, Construction::default());
    assert!(player.grid_is_consistent());
    Ok(())
}

#[tokio::test]
async fn test_selecting_a_faction_twice_is_rejected() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Water).await?;

    let result = app_bus
        .execute(
            SelectFaction {
                player_id: player.id,
                username: player.username.clone(),
                faction: Faction::Earth,
            },
            SelectFactionCommandHandler::new(),
        )
        .await;

    assert!(matches!(
        result,
        Err(ApplicationError::Db(DbError::PlayerAlreadyExists(_)))
    ));
    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.faction, Faction::Water);
    Ok(())
}

#[tokio::test]
async fn test_instant_construction_on_chosen_cell() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Fire).await?;

    let outcome = app_bus
        .start_construction(player.id, "aom_generator", Some(2))
        .await;

    assert!(outcome.success);
    assert!(outcome.message.contains("AOM Generator"));

    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.building_level(BuildingName::AomGenerator), 1);
    assert_eq!(stored.buildings[&BuildingName::AomGenerator].cell_index, Some(2));
    assert_eq!(stored.grid.get(2)?, Some(BuildingName::AomGenerator));
    assert!(!stored.construction.active);
    assert!(stored.grid_is_consistent());
    Ok(())
}

#[tokio::test]
async fn test_construction_without_cell_takes_first_empty_one() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Earth).await?;

    let result = app_bus
        .execute(
            StartConstruction {
                player_id: player.id,
                building_id: "arcane_lab".to_string(),
                cell_index: None,
            },
            StartConstructionCommandHandler::new(),
        )
        .await?;

    assert!(matches!(
        result,
        ConstructionResult::Completed {
            building: BuildingName::ArcaneLab,
            level: 1,
            ..
        }
    ));
    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.grid.get(0)?, Some(BuildingName::ArcaneLab));
    Ok(())
}

#[tokio::test]
async fn test_upgrade_beyond_max_level_changes_nothing() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Wind).await?;
    let before = provider.players().get(player.id).unwrap();
    let writes = provider.players().write_attempts();

    let outcome = app_bus.start_upgrade(player.id, "wizard_tower", 11).await;

    assert!(!outcome.success);
    assert!(outcome.message.contains("10"));
    assert_eq!(provider.players().write_attempts(), writes);
    let after = provider.players().get(player.id).unwrap();
    assert_eq!(after.buildings, before.buildings);
    assert_eq!(after.construction, before.construction);
    Ok(())
}

#[tokio::test]
async fn test_upgrade_and_unbuildable_buildings() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Fire).await?;

    let outcome = app_bus.start_upgrade(player.id, "wizard_tower", 3).await;
    assert!(outcome.success, "{}", outcome.message);
    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.building_level(BuildingName::WizardTower), 3);
    assert_eq!(stored.grid.get(6)?, Some(BuildingName::WizardTower));

    for building_id in ["library", "wizard_tower"] {
        let writes = provider.players().write_attempts();
        let outcome = app_bus
            .start_construction(player.id, building_id, Some(0))
            .await;
        assert!(!outcome.success);
        assert_eq!(provider.players().write_attempts(), writes);
    }
    Ok(())
}

#[tokio::test]
async fn test_busy_player_is_rejected() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Fire).await?;

    let pending = Construction {
        active: true,
        building: Some(BuildingName::DefenseTower),
        target_level: Some(1),
        time_left: 600.0,
        cell_index: Some(1),
        ..Default::default()
    };
    provider
        .players()
        .set_construction(player.id, &pending)
        .await?;
    let busy = provider.players().get(player.id).unwrap();
    assert_eq!(busy.construction, pending);

    let build = app_bus
        .start_construction(player.id, "pvp_arena", Some(3))
        .await;
    let upgrade = app_bus.start_upgrade(player.id, "wizard_tower", 2).await;

    assert!(!build.success);
    assert!(!upgrade.success);
    assert_eq!(build.message, GameError::ConstructionBusy.to_string());
    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.construction, busy.construction);
    assert_eq!(stored.buildings, busy.buildings);
    Ok(())
}

#[tokio::test]
async fn test_unknown_player_is_reported() -> Result<()> {
    let (app_bus, _) = setup_app();

    let outcome = app_bus.start_construction(42, "aom_generator", Some(0)).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Player 42 not found");
    Ok(())
}

#[tokio::test]
async fn test_wizards_and_research_flow() -> Result<()> {
    let (app_bus, provider) = setup_app();
    let player = register_player(&app_bus, Faction::Water).await?;

    let wizard = app_bus
        .execute(
            HireWizard {
                player_id: player.id,
            },
            HireWizardCommandHandler::new(),
        )
        .await?;
    assert_eq!(wizard.id, "wizard_2");
    assert_eq!(wizard.spells, vec!["icicle".to_string()]);

    let result = app_bus
        .execute(
            StartResearch {
                player_id: player.id,
                action: ResearchAction::Learn {
                    spell_id: "meteor".to_string(),
                },
            },
            StartResearchCommandHandler::new(),
        )
        .await?;
    assert!(result.completed);
    assert_eq!(result.to_string(), "'Meteor' learned!");

    let stored = provider.players().get(player.id).unwrap();
    assert_eq!(stored.wizards.len(), 2);
    assert_eq!(stored.learned_spell(Faction::Fire, "meteor").unwrap().level, 1);
    assert_eq!(stored.research, Research::default());

    let cancel = app_bus
        .execute(
            CancelResearch {
                player_id: player.id,
            },
            CancelResearchCommandHandler::new(),
        )
        .await;
    assert!(matches!(
        cancel,
        Err(ApplicationError::Game(GameError::NoActiveResearch))
    ));
    Ok(())
}
