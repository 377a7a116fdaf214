//! Directional tuples: rotated variants of a base adjustment.
//!
//! A base adjustment is authored for one orientation of the grid. Rotating
//! it through the grid's symmetry group gives one candidate per quadrant;
//! the arrow's location and rotation direction pick which one applies.
//!
//! Candidate `i` is the base vector rotated by `i` symmetry steps. Scene
//! space grows downward, so each step turns clockwise on screen, matching
//! [`Location::clockwise_octant`].

use enum_dispatch::enum_dispatch;
use glam::{DMat2, DVec2};

use crate::errors::ProcessingError;
use crate::log;
use crate::motion::{Location, MotionDescriptor, MotionType, RotationDirection};
use crate::types::Point;

use super::config::EngineConfig;

/// Produces the candidate adjustments for one symmetry group
#[enum_dispatch]
pub trait TupleGenerator {
    /// Rotation applied to the base vector for each candidate, in degrees
    fn rotation_angles(&self) -> &'static [f64];

    /// Rotate `base` by every angle, rounding to integer coordinates
    fn generate(&self, base: Point) -> Vec<Point> {
        let base = DVec2::from(base);
        self.rotation_angles()
            .iter()
            .map(|deg| Point::from(DMat2::from_angle(deg.to_radians()) * base).rounded())
            .collect()
    }
}

/// Right-angle symmetry used by shift motions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FourFold;

impl TupleGenerator for FourFold {
    fn rotation_angles(&self) -> &'static [f64] {
        &[0.0, 90.0, 180.0, 270.0]
    }
}

/// 45° symmetry used by motions that can sit on diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EightFold;

impl TupleGenerator for EightFold {
    fn rotation_angles(&self) -> &'static [f64] {
        &[0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0]
    }
}

#[enum_dispatch(TupleGenerator)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    FourFold,
    EightFold,
}

impl Symmetry {
    pub fn for_motion_type(motion_type: MotionType) -> Symmetry {
        match motion_type {
            MotionType::Pro | MotionType::Anti | MotionType::Float => FourFold.into(),
            MotionType::Static | MotionType::Dash => EightFold.into(),
        }
    }
}

/// Base quadrant of each location, per symmetry group.
///
/// Quadrants from this table are validated rather than wrapped: a value
/// outside `[0, N)` is a table defect.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantTable {
    four_fold: [i32; 8],
    eight_fold: [i32; 8],
}

impl Default for QuadrantTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl QuadrantTable {
    /// Quadrants counted clockwise from east. Four-fold quadrants span two
    /// octants each, so a diagonal shares the quadrant of the cardinal
    /// before it.
    pub fn standard() -> Self {
        let mut four_fold = [0; 8];
        let mut eight_fold = [0; 8];
        for &location in Location::ALL {
            let octant = location.clockwise_octant();
            four_fold[usize::from(octant)] = i32::from(octant / 2);
            eight_fold[usize::from(octant)] = i32::from(octant);
        }
        Self {
            four_fold,
            eight_fold,
        }
    }

    /// Override one entry
    pub fn with_quadrant(mut self, symmetry: Symmetry, location: Location, quadrant: i32) -> Self {
        self.row_mut(symmetry)[usize::from(location.clockwise_octant())] = quadrant;
        self
    }

    pub fn quadrant(&self, symmetry: Symmetry, location: Location) -> i32 {
        let row = match symmetry {
            Symmetry::FourFold(_) => &self.four_fold,
            Symmetry::EightFold(_) => &self.eight_fold,
        };
        row[usize::from(location.clockwise_octant())]
    }

    fn row_mut(&mut self, symmetry: Symmetry) -> &mut [i32; 8] {
        match symmetry {
            Symmetry::FourFold(_) => &mut self.four_fold,
            Symmetry::EightFold(_) => &mut self.eight_fold,
        }
    }
}

/// Expands a base adjustment into directional tuples and selects one.
#[derive(Debug, Clone)]
pub struct DirectionalTupleProcessor {
    quadrants: QuadrantTable,
    rotation_step: i32,
}

impl Default for DirectionalTupleProcessor {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl DirectionalTupleProcessor {
    pub fn new(quadrants: QuadrantTable, rotation_step: u8) -> Self {
        Self {
            quadrants,
            rotation_step: i32::from(rotation_step),
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(QuadrantTable::standard(), config.rotation_step())
    }

    /// Final adjustment for an arrow at `location`.
    pub fn process(
        &self,
        base_adjustment: Point,
        motion: &MotionDescriptor,
        location: Location,
    ) -> Result<Point, ProcessingError> {
        let candidates = self.generate(base_adjustment, motion)?;
        let index = self.quadrant_index(motion, location, candidates.len())?;
        let selected = Self::select(&candidates, index)?;
        log::debug!(
            %location,
            index,
            candidates = candidates.len(),
            %selected,
            "directional tuple"
        );
        Ok(selected)
    }

    /// Candidate adjustments for the motion's symmetry group.
    pub fn generate(
        &self,
        base_adjustment: Point,
        motion: &MotionDescriptor,
    ) -> Result<Vec<Point>, ProcessingError> {
        let candidates =
            Symmetry::for_motion_type(motion.effective_type()).generate(base_adjustment);
        if candidates.is_empty() {
            return Err(ProcessingError::EmptyGeneration {
                motion_type: motion.motion_type(),
            });
        }
        Ok(candidates)
    }

    /// Quadrant index into a candidate list of length `len`.
    ///
    /// The location's base quadrant must already lie in `[0, len)`; the
    /// rotation-direction step then wraps around the candidate ring.
    pub fn quadrant_index(
        &self,
        motion: &MotionDescriptor,
        location: Location,
        len: usize,
    ) -> Result<i32, ProcessingError> {
        let symmetry = Symmetry::for_motion_type(motion.effective_type());
        let base = self.quadrants.quadrant(symmetry, location);
        let n = i32::try_from(len).unwrap_or(i32::MAX);

        if base < 0 {
            return Err(ProcessingError::NegativeIndex { index: base });
        }
        if base >= n {
            return Err(ProcessingError::IndexOutOfRange { index: base, len });
        }

        let offset = match motion.effective_rotation() {
            RotationDirection::Clockwise => self.rotation_step,
            RotationDirection::CounterClockwise => -self.rotation_step,
            RotationDirection::NoRotation => 0,
        };
        Ok((base + offset).rem_euclid(n))
    }

    /// Pick candidate `index`; never wraps or clamps.
    pub fn select(candidates: &[Point], index: i32) -> Result<Point, ProcessingError> {
        let slot = usize::try_from(index).map_err(|_| ProcessingError::NegativeIndex { index })?;
        candidates
            .get(slot)
            .copied()
            .ok_or(ProcessingError::IndexOutOfRange {
                index,
                len: candidates.len(),
            })
    }
}
