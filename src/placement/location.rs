//! Arrow location: which compass point an arrow is anchored to

use crate::log;
use crate::motion::{Location, MotionDescriptor, MotionType, PictographContext};

/// Derives the anchor location of an arrow from its motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationCalculator;

impl LocationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Total: every motion has both a start and an end location.
    ///
    /// Static and dash motions stay where they began; everything else sits
    /// at the point it travels to.
    pub fn calculate(&self, motion: &MotionDescriptor, _context: &PictographContext) -> Location {
        let location = match motion.motion_type() {
            MotionType::Static | MotionType::Dash => motion.start_location(),
            MotionType::Pro | MotionType::Anti | MotionType::Float => motion.end_location(),
        };
        log::debug!(
            letter = %_context.letter(),
            motion_type = %motion.motion_type(),
            %location,
            "arrow location"
        );
        location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;
    use crate::motion::{GridMode, MotionKind, RotationDirection};

    fn motion(kind: MotionKind, start: Location, end: Location) -> MotionDescriptor {
        MotionDescriptor::new(kind, RotationDirection::Clockwise, start, end).unwrap()
    }

    fn context() -> PictographContext {
        PictographContext::new(Letter::A, GridMode::Diamond)
    }

    #[test]
    fn shift_motions_use_end_location() {
        let calc = LocationCalculator::new();
        let float = MotionKind::Float {
            pre_float_type: MotionType::Pro,
            pre_float_rotation: RotationDirection::NoRotation,
        };
        for kind in [MotionKind::Pro, MotionKind::Anti, float] {
            let m = motion(kind, Location::N, Location::S);
            assert_eq!(calc.calculate(&m, &context()), Location::S, "{kind:?}");
        }
    }

    #[test]
    fn in_place_motions_use_start_location() {
        let calc = LocationCalculator::new();
        for kind in [MotionKind::Static, MotionKind::Dash] {
            let m = motion(kind, Location::NE, Location::SW);
            assert_eq!(calc.calculate(&m, &context()), Location::NE, "{kind:?}");
        }
    }
}
