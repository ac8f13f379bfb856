pub mod buildings;
pub mod construction;
pub mod grid;
pub mod player;
pub mod research;
pub mod spells;
pub mod wizard;
