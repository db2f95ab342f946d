//! Playback and display constants.

/// Animation tick rate (Hz) — one tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Progress units added per animation tick.
/// At 0.5 of 100 units, a full sequence plays out over ~200 frames.
pub const PROGRESS_PER_TICK: f64 = 0.5;

/// Upper bound of the playback progress scale.
pub const PROGRESS_MAX: f64 = 100.0;

/// Upper bound of field coordinates (percent of the field image's bounding box).
pub const COORD_MAX: f64 = 100.0;

/// Number of keyframe steps the oracle produces on success.
pub const DEFAULT_STEP_COUNT: usize = 6;

// --- Display ---

/// Default drawing surface width in pixels (16:9).
pub const SURFACE_WIDTH: u32 = 800;

/// Default drawing surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 450;

/// Field grid cell size in pixels.
pub const GRID_CELL_PX: u32 = 40;

/// Ball marker radius in pixels.
pub const BALL_RADIUS_PX: i32 = 6;

/// Player marker radius in pixels.
pub const PLAYER_RADIUS_PX: i32 = 8;

/// Goal net rectangle width in pixels.
pub const GOAL_WIDTH_PX: u32 = 40;

/// Goal net rectangle height in pixels.
pub const GOAL_HEIGHT_PX: u32 = 20;

/// Goal net stroke width in pixels.
pub const GOAL_STROKE_PX: u32 = 3;

/// Vertical offset of a player label's baseline below the marker center.
pub const LABEL_OFFSET_PX: i32 = 20;
