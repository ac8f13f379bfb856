use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

#[derive(sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[sqlx(type_name = "faction", rename_all = "lowercase")]
pub enum Faction {
    Fire,
    Water,
    Wind,
    Earth,
}

/// A `players` row. City state is stored as JSONB documents.
#[derive(Debug, FromRow, Clone)]
pub struct Player {
    pub id: i64,
    pub username: String,
    pub faction: Faction,
    pub created_at: DateTime<Utc>,
    pub buildings: Value,
    pub buildings_grid: Value,
    pub construction: Value,
    pub spells: Value,
    pub available_spells: Value,
    pub wizards: Value,
    pub research: Value,
}
