//! Arrow rotation angles

use std::collections::HashMap;

use crate::log;
use crate::motion::{Location, MotionDescriptor, Orientation};
use crate::types::Angle;

/// Angles for arrows whose prop points in toward the grid center.
///
/// Locations missing from the table (the diagonals, in the standard table)
/// rotate by 0° and rely on directional tuples for their final offset.
#[derive(Debug, Clone, Default)]
pub struct RotationTable {
    inward: HashMap<Location, Angle>,
}

impl RotationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        let mut table = Self::new();
        table.insert(Location::W, Angle::degrees(0.0));
        table.insert(Location::N, Angle::degrees(90.0));
        table.insert(Location::E, Angle::degrees(180.0));
        table.insert(Location::S, Angle::degrees(270.0));
        table
    }

    pub fn insert(&mut self, location: Location, angle: Angle) {
        self.inward.insert(location, angle);
    }

    fn get(&self, location: Location) -> Option<Angle> {
        self.inward.get(&location).copied()
    }
}

/// Derives the arrow rotation from prop orientation and location.
#[derive(Debug, Clone)]
pub struct RotationCalculator {
    table: RotationTable,
}

impl Default for RotationCalculator {
    fn default() -> Self {
        Self::new(RotationTable::standard())
    }
}

impl RotationCalculator {
    pub fn new(table: RotationTable) -> Self {
        Self { table }
    }

    /// Total; `Out` flips the inward angle by 180°.
    pub fn calculate(&self, motion: &MotionDescriptor, location: Location) -> Angle {
        let Some(inward) = self.table.get(location) else {
            log::debug!(%location, "no base rotation, using 0°");
            return Angle::ZERO;
        };
        match motion.start_orientation() {
            Orientation::In => inward,
            Orientation::Out => inward.flipped(),
        }
    }
}
