pub const WINDOW_WIDTH: u32 = 1000;
pub const WINDOW_HEIGHT: u32 = 634;
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);
pub const STATS_LOG_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);

// Car dynamics
pub const ACCELERATION_RATE: f32 = 1.0;
pub const DECELERATION_RATE: f32 = 1.0;
pub const MAX_SPEED: f32 = 120.0;
/// Upper boundary of the track; cars drive up the screen towards it.
pub const START_LINE_Y: i32 = 20;
pub const LATERAL_STEP: i32 = 10;
pub const CAR_WIDTH: u32 = 39;
pub const CAR_HEIGHT: u32 = 65;

pub const OBSTACLE_WIDTH: u32 = 42;
pub const OBSTACLE_HEIGHT: u32 = 42;

// Proximity thresholds
pub const VISIBILITY_DISTANCE: f64 = 200.0;
pub const IMMINENT_DISTANCE: f64 = 58.0;

// Computer lane the avoidance steering tries to stay within
pub const LANE_LEFT_BOUNDARY: i32 = 450;
pub const LANE_RIGHT_BOUNDARY: i32 = 530;

pub const BLINK_INTERVAL: f32 = 0.5;

// Background "rushing road" effect
pub const BACKDROP_SCALE_STEP: f32 = 0.02;
pub const BACKDROP_SCALE_MAX: f32 = 5.2;
