pub mod buildings;
pub mod common;
pub mod errors;
pub mod faction;

pub use errors::Result;
