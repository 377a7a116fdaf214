//! Arrow placement engine
//!
//! This module is organized into submodules, one per pipeline stage:
//! - `location`: which compass point an arrow anchors to
//! - `coordinates`: base anchor point for that location
//! - `rotation`: arrow rotation angle
//! - `adjustment`: two-tier special/default adjustment lookup
//! - `tuples`: directional tuple generation and selection
//! - `config` / `defaults`: scene geometry
//!
//! [`ArrowPlacementEngine`] runs the stages for one arrow and is the only
//! place where stage failures become fallback values.

pub mod adjustment;
pub mod config;
pub mod coordinates;
pub mod defaults;
pub mod location;
pub mod rotation;
pub mod tuples;

pub use adjustment::{
    AdjustmentKey, AdjustmentLookup, DefaultPlacementKey, DefaultPlacementTable, DefaultPlacements,
    OrientationKey, PlacementTables, SpecialPlacementTable, SpecialPlacements, TurnsTuple,
};
pub use config::EngineConfig;
pub use coordinates::{AnchorRing, AnchorTable, CoordinateSystem};
pub use location::LocationCalculator;
pub use rotation::{RotationCalculator, RotationTable};
pub use tuples::{DirectionalTupleProcessor, QuadrantTable, Symmetry};

use rayon::prelude::*;

use crate::letter::Letter;
use crate::log;
use crate::motion::{Color, MotionDescriptor, PictographContext};
use crate::types::{Angle, Point};

/// Where an arrow goes and how it is turned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub position: Point,
    pub rotation: Angle,
}

impl From<ArrowPlacement> for (Point, f64) {
    fn from(p: ArrowPlacement) -> Self {
        (p.position, p.rotation.to_degrees())
    }
}

/// Placements for every arrow of one pictograph
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PictographPlacement {
    pub blue: Option<ArrowPlacement>,
    pub red: Option<ArrowPlacement>,
}

impl PictographPlacement {
    pub fn get(&self, color: Color) -> Option<ArrowPlacement> {
        match color {
            Color::Blue => self.blue,
            Color::Red => self.red,
        }
    }
}

/// Composes the placement stages for each arrow.
///
/// Holds only read-only state, so one engine can be shared across threads.
#[derive(Debug, Clone)]
pub struct ArrowPlacementEngine {
    locations: LocationCalculator,
    coordinates: CoordinateSystem,
    rotations: RotationCalculator,
    adjustments: AdjustmentLookup,
    tuples: DirectionalTupleProcessor,
}

impl ArrowPlacementEngine {
    pub fn new(
        locations: LocationCalculator,
        coordinates: CoordinateSystem,
        rotations: RotationCalculator,
        adjustments: AdjustmentLookup,
        tuples: DirectionalTupleProcessor,
    ) -> Self {
        Self {
            locations,
            coordinates,
            rotations,
            adjustments,
            tuples,
        }
    }

    /// Place the `color` arrow of a pictograph.
    ///
    /// Always returns a usable placement. A lookup miss places the arrow on
    /// its bare anchor (warning); a tuple processing failure does the same
    /// but is logged as an error since it means the tables disagree.
    pub fn calculate_arrow_position(
        &self,
        motion: &MotionDescriptor,
        context: &PictographContext,
        letter: Letter,
        color: Color,
    ) -> ArrowPlacement {
        let location = self.locations.calculate(motion, context);
        let initial = self.coordinates.get_initial_position(motion, location);
        let rotation = self.rotations.calculate(motion, location);

        let base_adjustment = match self
            .adjustments
            .get_base_adjustment(context, motion, letter, color)
        {
            Ok(adjustment) => adjustment,
            Err(_miss) => {
                log::warn!(
                    %letter,
                    %color,
                    %location,
                    special = %_miss.special,
                    default = %_miss.default,
                    "no placement adjustment, using bare anchor"
                );
                Point::ZERO
            }
        };

        let final_adjustment = match self.tuples.process(base_adjustment, motion, location) {
            Ok(adjustment) => adjustment,
            Err(_err) => {
                log::error!(
                    %letter,
                    %color,
                    %location,
                    motion_type = %motion.motion_type(),
                    error = %_err,
                    "directional tuple processing failed, using bare anchor"
                );
                Point::ZERO
            }
        };

        let placement = ArrowPlacement {
            position: initial + final_adjustment,
            rotation,
        };
        log::debug!(
            %letter,
            %color,
            position = %placement.position,
            rotation = %placement.rotation,
            "arrow placed"
        );
        placement
    }

    /// Place every arrow of a pictograph using its own letter.
    pub fn place_pictograph(&self, context: &PictographContext) -> PictographPlacement {
        let mut placement = PictographPlacement::default();
        for (color, motion) in context.motions() {
            let arrow = self.calculate_arrow_position(motion, context, context.letter(), color);
            match color {
                Color::Blue => placement.blue = Some(arrow),
                Color::Red => placement.red = Some(arrow),
            }
        }
        placement
    }

    /// Place many pictographs in parallel; output order matches input order.
    pub fn place_batch(&self, contexts: &[PictographContext]) -> Vec<PictographPlacement> {
        contexts
            .par_iter()
            .map(|context| self.place_pictograph(context))
            .collect()
    }
}

/// Build the full pipeline from lookup tables and scene configuration.
pub fn build_engine(tables: PlacementTables, config: &EngineConfig) -> ArrowPlacementEngine {
    ArrowPlacementEngine::new(
        LocationCalculator::new(),
        CoordinateSystem::from_config(config),
        RotationCalculator::default(),
        AdjustmentLookup::new(tables),
        DirectionalTupleProcessor::from_config(config),
    )
}
