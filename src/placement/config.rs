//! Engine configuration

use crate::errors::ConfigError;
use crate::types::{Point, try_positive};

use super::defaults;

/// Scene geometry and quadrant stepping used to build an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    scene_size: f64,
    hand_ring_radius: f64,
    outer_ring_radius: f64,
    rotation_step: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scene_size: defaults::SCENE_SIZE,
            hand_ring_radius: defaults::HAND_RING_RADIUS,
            outer_ring_radius: defaults::OUTER_RING_RADIUS,
            rotation_step: defaults::ROTATION_STEP,
        }
    }
}

impl EngineConfig {
    /// Create a config with validation.
    ///
    /// All lengths must be finite and positive, the outer ring must lie
    /// beyond the hand ring, and both rings must fit inside the scene.
    pub fn try_new(
        scene_size: f64,
        hand_ring_radius: f64,
        outer_ring_radius: f64,
        rotation_step: u8,
    ) -> Result<Self, ConfigError> {
        let positive = |field: &'static str, val: f64| {
            try_positive(val).map_err(|source| ConfigError::InvalidValue { field, source })
        };
        let scene_size = positive("scene_size", scene_size)?;
        let hand = positive("hand_ring_radius", hand_ring_radius)?;
        let outer = positive("outer_ring_radius", outer_ring_radius)?;

        if outer <= hand {
            return Err(ConfigError::RingOrder { hand, outer });
        }
        if outer > scene_size / 2.0 {
            return Err(ConfigError::RingOverflow { outer, scene_size });
        }

        Ok(Self {
            scene_size,
            hand_ring_radius: hand,
            outer_ring_radius: outer,
            rotation_step,
        })
    }

    pub fn scene_size(&self) -> f64 {
        self.scene_size
    }

    /// Scene center, used as the fallback anchor
    pub fn center(&self) -> Point {
        Point::new(self.scene_size / 2.0, self.scene_size / 2.0)
    }

    pub fn hand_ring_radius(&self) -> f64 {
        self.hand_ring_radius
    }

    pub fn outer_ring_radius(&self) -> f64 {
        self.outer_ring_radius
    }

    pub fn rotation_step(&self) -> u8 {
        self.rotation_step
    }
}
