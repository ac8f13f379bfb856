/// Players are keyed by their Telegram user id.
pub type PlayerId = i64;

/// Side length of the city grid.
pub const GRID_SIDE: u8 = 3;

/// Number of cells in the city grid (3x3).
pub const GRID_CELLS: u8 = GRID_SIDE * GRID_SIDE;
