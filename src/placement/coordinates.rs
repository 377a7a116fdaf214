//! Base anchor points for arrows in scene space

use std::collections::HashMap;

use crate::log;
use crate::motion::{Location, MotionDescriptor, MotionType};
use crate::types::Point;

use super::config::EngineConfig;

/// Which ring of grid points an arrow anchors on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorRing {
    /// Hand points, where in-place motions sit
    Hand,
    /// Outer (layer 2) points, where shift motions sit
    Outer,
}

impl AnchorRing {
    /// Ring for a motion type. Float never reaches here through
    /// [`MotionDescriptor::effective_type`], but anchors like a shift.
    pub fn for_motion_type(motion_type: MotionType) -> AnchorRing {
        match motion_type {
            MotionType::Pro | MotionType::Anti | MotionType::Float => AnchorRing::Outer,
            MotionType::Static | MotionType::Dash => AnchorRing::Hand,
        }
    }
}

/// Fixed table from `(ring, location)` to an anchor point
#[derive(Debug, Clone, Default)]
pub struct AnchorTable {
    points: HashMap<(AnchorRing, Location), Point>,
}

impl AnchorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Both rings at all eight compass points, centered in the scene.
    pub fn from_config(config: &EngineConfig) -> Self {
        let center = config.center();
        let mut table = Self::new();
        for (ring, radius) in [
            (AnchorRing::Hand, config.hand_ring_radius()),
            (AnchorRing::Outer, config.outer_ring_radius()),
        ] {
            for &location in Location::ALL {
                let offset = Point::from(location.unit_vec() * radius);
                table.insert(ring, location, center + offset);
            }
        }
        table
    }

    pub fn insert(&mut self, ring: AnchorRing, location: Location, point: Point) {
        self.points.insert((ring, location), point);
    }

    pub fn get(&self, ring: AnchorRing, location: Location) -> Option<Point> {
        self.points.get(&(ring, location)).copied()
    }
}

/// Maps a motion and its location to the arrow's base anchor.
#[derive(Debug, Clone)]
pub struct CoordinateSystem {
    anchors: AnchorTable,
    fallback: Point,
}

impl CoordinateSystem {
    pub fn new(anchors: AnchorTable, fallback: Point) -> Self {
        Self { anchors, fallback }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(AnchorTable::from_config(config), config.center())
    }

    /// Anchor point for an arrow. Total: a table without the requested
    /// entry yields the scene center.
    pub fn get_initial_position(&self, motion: &MotionDescriptor, location: Location) -> Point {
        let ring = AnchorRing::for_motion_type(motion.effective_type());
        match self.anchors.get(ring, location) {
            Some(point) => point,
            None => {
                log::debug!(?ring, %location, "no anchor point, using scene center");
                self.fallback
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{MotionKind, RotationDirection};

    fn assert_point_eq(actual: Point, expected: Point) {
        const EPSILON: f64 = 1e-9;
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "point mismatch: {} != {}",
            actual,
            expected
        );
    }

    fn motion(kind: MotionKind) -> MotionDescriptor {
        MotionDescriptor::new(kind, RotationDirection::Clockwise, Location::N, Location::E).unwrap()
    }

    #[test]
    fn cardinal_anchors_sit_on_their_rings() {
        let coords = CoordinateSystem::from_config(&EngineConfig::default());

        let static_n = coords.get_initial_position(&motion(MotionKind::Static), Location::N);
        assert_point_eq(static_n, Point::new(475.0, 475.0 - 143.1));

        let pro_e = coords.get_initial_position(&motion(MotionKind::Pro), Location::E);
        assert_point_eq(pro_e, Point::new(475.0 + 202.4, 475.0));
    }

    #[test]
    fn diagonal_outer_anchor_lines_up_with_hand_points() {
        // The outer diagonal shares its coordinates with the adjacent hand points
        let coords = CoordinateSystem::from_config(&EngineConfig::default());
        let ne = coords.get_initial_position(&motion(MotionKind::Anti), Location::NE);
        let r = 202.4 * std::f64::consts::FRAC_1_SQRT_2;
        assert_point_eq(ne, Point::new(475.0 + r, 475.0 - r));
        assert!((ne.x - 618.1).abs() < 0.1);
        assert!((ne.y - 331.9).abs() < 0.1);
    }

    #[test]
    fn float_anchors_like_its_pre_float_type() {
        let coords = CoordinateSystem::from_config(&EngineConfig::default());
        let float = motion(MotionKind::Float {
            pre_float_type: MotionType::Dash,
            pre_float_rotation: RotationDirection::NoRotation,
        });
        assert_eq!(
            coords.get_initial_position(&float, Location::W),
            coords.get_initial_position(&motion(MotionKind::Dash), Location::W)
        );
    }

    #[test]
    fn missing_anchor_falls_back_to_center() {
        let mut anchors = AnchorTable::new();
        anchors.insert(AnchorRing::Outer, Location::N, Point::new(1.0, 2.0));
        let coords = CoordinateSystem::new(anchors, Point::new(475.0, 475.0));

        assert_eq!(
            coords.get_initial_position(&motion(MotionKind::Pro), Location::N),
            Point::new(1.0, 2.0)
        );
        assert_eq!(
            coords.get_initial_position(&motion(MotionKind::Static), Location::N),
            Point::new(475.0, 475.0)
        );
    }
}
