use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;

use academy_app::repository::PlayerRepository;
use academy_game::models::{
    construction::Construction, player::Player, research::Research, wizard::Wizard,
};
use academy_types::{
    Result,
    buildings::BuildingName,
    common::PlayerId,
    errors::{ApplicationError, DbError},
};

use crate::{
    mapping::PlayerDocuments,
    models::{self as db_models},
};

/// Implements PlayerRepository and operates on transactions.
#[derive(Clone)]
pub struct PostgresPlayerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresPlayerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

fn db_error(e: sqlx::Error) -> ApplicationError {
    ApplicationError::Db(DbError::Database(e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApplicationError> {
    serde_json::to_value(value).map_err(|e| ApplicationError::Db(DbError::Json(e)))
}

#[async_trait::async_trait]
impl<'a> PlayerRepository for PostgresPlayerRepository<'a> {
    async fn get_by_id(&self, player_id: PlayerId) -> Result<Player, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        // row lock held until the unit of work ends, serialising requests per player
        let row = sqlx::query_as::<_, db_models::Player>(
            r#"
            SELECT id, username, faction, created_at, buildings, buildings_grid,
                   construction, spells, available_spells, wizards, research
            FROM players
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(player_id)
        .fetch_optional(&mut *tx_guard.as_mut())
        .await
        .map_err(db_error)?
        .ok_or(ApplicationError::Db(DbError::PlayerNotFound(player_id)))?;

        Ok(Player::try_from(row)?)
    }

    async fn create(&self, player: &Player) -> Result<(), ApplicationError> {
        let docs = PlayerDocuments::try_from(player)?;
        let faction: db_models::Faction = player.faction.into();
        let mut tx_guard = self.tx.lock().await;

        let inserted = sqlx::query(
            r#"
            INSERT INTO players (id, username, faction, created_at, buildings, buildings_grid,
                                 construction, spells, available_spells, wizards, research)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(player.id)
        .bind(&player.username)
        .bind(faction)
        .bind(player.created_at)
        .bind(docs.buildings)
        .bind(docs.buildings_grid)
        .bind(docs.construction)
        .bind(docs.spells)
        .bind(docs.available_spells)
        .bind(docs.wizards)
        .bind(docs.research)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(db_error)?;

        if inserted.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerAlreadyExists(player.id)));
        }
        Ok(())
    }

    async fn save(&self, player: &Player) -> Result<(), ApplicationError> {
        let docs = PlayerDocuments::try_from(player)?;
        let faction: db_models::Faction = player.faction.into();
        let mut tx_guard = self.tx.lock().await;

        let updated = sqlx::query(
            r#"
            UPDATE players
            SET username = $2,
                faction = $3,
                buildings = $4,
                buildings_grid = $5,
                construction = $6,
                spells = $7,
                available_spells = $8,
                wizards = $9,
                research = $10
            WHERE id = $1
            "#,
        )
        .bind(player.id)
        .bind(&player.username)
        .bind(faction)
        .bind(docs.buildings)
        .bind(docs.buildings_grid)
        .bind(docs.construction)
        .bind(docs.spells)
        .bind(docs.available_spells)
        .bind(docs.wizards)
        .bind(docs.research)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(db_error)?;

        if updated.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player.id)));
        }
        Ok(())
    }

    async fn set_construction(
        &self,
        player_id: PlayerId,
        construction: &Construction,
    ) -> Result<(), ApplicationError> {
        let construction = to_json(construction)?;
        let mut tx_guard = self.tx.lock().await;

        let updated = sqlx::query("UPDATE players SET construction = $2 WHERE id = $1")
            .bind(player_id)
            .bind(construction)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        if updated.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player_id)));
        }
        Ok(())
    }

    async fn set_construction_if_idle(
        &self,
        player_id: PlayerId,
        construction: &Construction,
    ) -> Result<bool, ApplicationError> {
        let construction = to_json(construction)?;
        let mut tx_guard = self.tx.lock().await;

        let updated = sqlx::query(
            r#"
            UPDATE players
            SET construction = $2
            WHERE id = $1
              AND COALESCE((construction ->> 'active')::boolean, false) = false
            "#,
        )
        .bind(player_id)
        .bind(construction)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(db_error)?;

        Ok(updated.rows_affected() == 1)
    }

    async fn finish_construction(
        &self,
        player_id: PlayerId,
        building: BuildingName,
        target_level: u8,
        cell_index: Option<u8>,
    ) -> Result<(), ApplicationError> {
        let mut player = self.get_by_id(player_id).await?;
        player.finish_construction(building, target_level, cell_index)?;

        let buildings = to_json(&player.buildings)?;
        let grid = to_json(&player.grid)?;
        let construction = to_json(&player.construction)?;
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            UPDATE players
            SET buildings = $2, buildings_grid = $3, construction = $4
            WHERE id = $1
            "#,
        )
        .bind(player_id)
        .bind(buildings)
        .bind(grid)
        .bind(construction)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(db_error)?;

        Ok(())
    }

    async fn update_research(
        &self,
        player_id: PlayerId,
        research: &Research,
    ) -> Result<(), ApplicationError> {
        let research = to_json(research)?;
        let mut tx_guard = self.tx.lock().await;

        let updated = sqlx::query("UPDATE players SET research = $2 WHERE id = $1")
            .bind(player_id)
            .bind(research)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        if updated.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player_id)));
        }
        Ok(())
    }

    async fn add_wizard(
        &self,
        player_id: PlayerId,
        wizard: &Wizard,
    ) -> Result<(), ApplicationError> {
        let appended = to_json(&[wizard])?;
        let mut tx_guard = self.tx.lock().await;

        let updated = sqlx::query("UPDATE players SET wizards = wizards || $2 WHERE id = $1")
            .bind(player_id)
            .bind(appended)
            .execute(&mut *tx_guard.as_mut())
            .await
            .map_err(db_error)?;

        if updated.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PlayerNotFound(player_id)));
        }
        Ok(())
    }
}
