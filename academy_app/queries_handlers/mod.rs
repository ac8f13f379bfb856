mod get_city_overview;
mod get_player_by_id;

pub use get_city_overview::GetCityOverviewHandler;
pub use get_player_by_id::GetPlayerByIdHandler;
