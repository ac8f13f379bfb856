use rand::Rng;

use academy_types::{buildings::BuildingName, common::PlayerId, faction::Faction};

use crate::models::{
    construction::{Construction, ConstructionKind},
    player::Player,
};

#[derive(Default, Clone)]
pub struct PlayerFactoryOptions<'a> {
    pub id: Option<PlayerId>,
    pub username: Option<&'a str>,
    pub faction: Option<Faction>,
}

pub fn player_factory(options: PlayerFactoryOptions) -> Player {
    let mut rng = rand::thread_rng();
    let id = options.id.unwrap_or_else(|| rng.gen_range(1..i64::MAX));
    let default_username: String = format!("user_{}", rng.r#gen::<u32>());

    Player::new(
        id,
        options.username.map_or(default_username, |s| s.to_string()),
        options.faction.unwrap_or(Faction::Fire),
    )
}

/// An active construction occupying the slot.
pub fn busy_construction(building: BuildingName) -> Construction {
    Construction {
        active: true,
        building: Some(building),
        target_level: Some(1),
        time_left: 3600.0,
        cell_index: None,
        kind: Some(ConstructionKind::Build),
    }
}
