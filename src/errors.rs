//! Error types with diagnostic codes using miette
//!
//! Leaf components report failures honestly through these types. Only the
//! placement orchestrator turns them into fallback values.

use miette::Diagnostic;
use thiserror::Error;

use crate::motion::MotionType;
use crate::placement::adjustment::{AdjustmentKey, DefaultPlacementKey};
use crate::types::NumericError;

// ============================================================================
// Lookup Errors
// ============================================================================

/// Neither the special nor the default placement table has an entry.
///
/// Sparse tables make this a normal outcome.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
#[error("no placement adjustment for {special} or {default}")]
#[diagnostic(
    code(pictoplace::lookup::miss),
    help("add a special placement for this letter or a default for the motion")
)]
pub struct LookupMiss {
    /// Key probed in the special tier
    pub special: AdjustmentKey,
    /// Key probed in the default tier
    pub default: DefaultPlacementKey,
}

// ============================================================================
// Processing Errors
// ============================================================================

/// Structural failures in directional tuple processing.
///
/// Each variant means the rotation set and the quadrant table disagree.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ProcessingError {
    #[error("no directional tuples generated for {motion_type} motion")]
    #[diagnostic(code(pictoplace::tuples::empty_generation))]
    EmptyGeneration { motion_type: MotionType },

    #[error("quadrant index {index} is negative")]
    #[diagnostic(
        code(pictoplace::tuples::negative_index),
        help("quadrant tables must only hold non-negative quadrants")
    )]
    NegativeIndex { index: i32 },

    #[error("quadrant index {index} out of range for {len} directional tuples")]
    #[diagnostic(
        code(pictoplace::tuples::index_out_of_range),
        help("the quadrant table holds more quadrants than the generator produces")
    )]
    IndexOutOfRange { index: i32, len: usize },
}

// ============================================================================
// Domain Errors
// ============================================================================

/// Errors raised while building a motion descriptor
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("float turns on a {motion_type} motion")]
    #[diagnostic(
        code(pictoplace::motion::float_turns),
        help("only float motions may carry the float turns marker")
    )]
    FloatTurnsWithoutFloat { motion_type: MotionType },

    #[error("a float motion needs its pre-float type and rotation")]
    #[diagnostic(
        code(pictoplace::motion::float_without_history),
        help("floats are built with their pre-float type and rotation")
    )]
    FloatWithoutHistory,

    #[error("a float motion cannot have float as its pre-float type")]
    #[diagnostic(code(pictoplace::motion::nested_float))]
    NestedFloat,

    #[error("invalid turns: {value}")]
    #[diagnostic(
        code(pictoplace::motion::invalid_turns),
        help("turns go from 0 to 3 in half steps")
    )]
    InvalidTurns { value: f64 },
}

/// Unknown spelling for a symbolic enum
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
#[diagnostic(code(pictoplace::symbol::unknown))]
pub struct SymbolError {
    pub kind: &'static str,
    pub value: String,
}

impl SymbolError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors from engine configuration validation
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid {field}: {source}")]
    #[diagnostic(code(pictoplace::config::invalid_value))]
    InvalidValue {
        field: &'static str,
        #[source]
        source: NumericError,
    },

    #[error("outer ring radius {outer} must exceed hand ring radius {hand}")]
    #[diagnostic(code(pictoplace::config::ring_order))]
    RingOrder { hand: f64, outer: f64 },

    #[error("rings of radius {outer} do not fit a scene of size {scene_size}")]
    #[diagnostic(code(pictoplace::config::ring_overflow))]
    RingOverflow { outer: f64, scene_size: f64 },
}
