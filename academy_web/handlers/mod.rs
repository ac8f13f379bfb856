mod catalog_handler;
mod construction_handler;
mod health_handler;
mod helpers;
mod player_handler;

pub use catalog_handler::{buildings_catalog, spells_catalog};
pub use construction_handler::{BuildRequest, UpgradeRequest, build, upgrade};
pub use health_handler::{health, test_endpoint};
pub(crate) use helpers::*;
pub use player_handler::player_city;
