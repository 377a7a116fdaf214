//! Default scene geometry (logical units of a square canvas)

use crate::types::Point;

/// Side of the square scene canvas
pub const SCENE_SIZE: f64 = 950.0;
/// Scene center; also the fallback anchor for unknown locations
pub const CENTER: Point = Point::new(SCENE_SIZE / 2.0, SCENE_SIZE / 2.0);
/// Distance from the center to the hand points
pub const HAND_RING_RADIUS: f64 = 143.1;
/// Distance from the center to the outer (layer 2) points
pub const OUTER_RING_RADIUS: f64 = 202.4;
/// Quadrant steps applied per rotation direction
pub const ROTATION_STEP: u8 = 1;
