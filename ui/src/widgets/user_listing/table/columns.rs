//! Column layout of the users table.

/// Avatar, Full Name, View.
pub const NUM_COLUMNS: usize = 3;
pub const MIN_COL_WIDTH: f32 = 60.0;
pub const ROW_HEIGHT: f32 = 44.0;
pub const AVATAR_SIZE: f32 = 32.0;
