//! Arrow placement for kinetic notation pictographs.
//!
//! A pictograph shows up to two prop motions, blue and red. Each motion is
//! drawn as an arrow glyph, and this crate decides where that arrow sits in
//! scene space and how it is rotated:
//!
//! 1. the motion's compass [`Location`](motion::Location) is inferred
//! 2. a base anchor point and a rotation angle are looked up for it
//! 3. a base adjustment comes from the special (per letter) or default tier
//! 4. the adjustment is rotated into the arrow's quadrant and added to the anchor
//!
//! ```
//! use pictoplace::{build_engine, EngineConfig, PlacementTables};
//! use pictoplace::letter::Letter;
//! use pictoplace::motion::*;
//!
//! let engine = build_engine(PlacementTables::empty(), &EngineConfig::default());
//! let motion = MotionDescriptor::new(
//!     MotionKind::Static,
//!     RotationDirection::NoRotation,
//!     Location::N,
//!     Location::N,
//! )?;
//! let context = PictographContext::new(Letter::Alpha, GridMode::Diamond)
//!     .with_motion(Color::Blue, motion);
//!
//! let arrow = engine.calculate_arrow_position(&motion, &context, Letter::Alpha, Color::Blue);
//! assert_eq!(arrow.rotation.to_degrees(), 90.0);
//! # Ok::<(), pictoplace::errors::MotionError>(())
//! ```

pub mod errors;
pub mod letter;
pub mod log;
pub mod motion;
pub mod placement;
pub mod types;

pub use placement::{
    ArrowPlacement, ArrowPlacementEngine, EngineConfig, PictographPlacement, PlacementTables,
    build_engine,
};
pub use types::{Angle, Point};
