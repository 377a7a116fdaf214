//! Symbolic motion model: the inputs of arrow placement.
//!
//! A pictograph carries up to two motions, one per prop color. Each motion
//! is described only by symbols (type, rotation, compass locations, turns,
//! orientations); the placement engine turns those into scene geometry.

use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;
use std::str::FromStr;

use glam::{DVec2, dvec2};

use crate::errors::{MotionError, SymbolError};
use crate::letter::Letter;

/// Closed enum with a canonical spelling per variant.
macro_rules! symbolic_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $symbol:literal),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.symbol())
            }
        }

        impl FromStr for $name {
            type Err = SymbolError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($symbol => Ok($name::$variant),)*
                    _ => Err(SymbolError::new($kind, s)),
                }
            }
        }
    };
}

symbolic_enum! {
    /// Kind of prop motion
    MotionType("motion type") {
        Pro => "pro",
        Anti => "anti",
        Static => "static",
        Dash => "dash",
        Float => "float",
    }
}

impl MotionType {
    /// Shift motions travel between hand points and anchor on the outer ring.
    pub fn is_shift(self) -> bool {
        matches!(self, MotionType::Pro | MotionType::Anti | MotionType::Float)
    }
}

symbolic_enum! {
    /// Prop rotation direction
    RotationDirection("rotation direction") {
        Clockwise => "cw",
        CounterClockwise => "ccw",
        NoRotation => "none",
    }
}

symbolic_enum! {
    /// One of the eight compass points of the grid
    Location("location") {
        N => "n",
        NE => "ne",
        E => "e",
        SE => "se",
        S => "s",
        SW => "sw",
        W => "w",
        NW => "nw",
    }
}

impl Location {
    /// Position on the compass counted clockwise from east (E = 0 … NE = 7).
    pub fn clockwise_octant(self) -> u8 {
        match self {
            Location::E => 0,
            Location::SE => 1,
            Location::S => 2,
            Location::SW => 3,
            Location::W => 4,
            Location::NW => 5,
            Location::N => 6,
            Location::NE => 7,
        }
    }

    pub fn is_diagonal(self) -> bool {
        self.clockwise_octant() % 2 == 1
    }

    /// Unit vector pointing from the grid center toward this location.
    ///
    /// Scene space grows downward, so north is `-y`.
    pub fn unit_vec(self) -> DVec2 {
        const D: f64 = FRAC_1_SQRT_2;
        match self {
            Location::N => dvec2(0.0, -1.0),
            Location::NE => dvec2(D, -D),
            Location::E => dvec2(1.0, 0.0),
            Location::SE => dvec2(D, D),
            Location::S => dvec2(0.0, 1.0),
            Location::SW => dvec2(-D, D),
            Location::W => dvec2(-1.0, 0.0),
            Location::NW => dvec2(-D, -D),
        }
    }
}

symbolic_enum! {
    /// Prop orientation relative to the grid center
    Orientation("orientation") {
        In => "in",
        Out => "out",
    }
}

symbolic_enum! {
    /// Prop color; blue always sorts before red
    Color("color") {
        Blue => "blue",
        Red => "red",
    }
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }
}

symbolic_enum! {
    /// Grid layout
    GridMode("grid mode") {
        Diamond => "diamond",
        Box => "box",
    }
}

// ============================================================================
// Turns
// ============================================================================

const MAX_HALF_TURNS: u8 = 6;

/// Number of prop rotations (0 to 3 in half steps) or the float marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Turns(TurnsRepr);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum TurnsRepr {
    Halves(u8),
    Float,
}

impl Turns {
    pub const ZERO: Turns = Turns(TurnsRepr::Halves(0));
    pub const FLOAT: Turns = Turns(TurnsRepr::Float);

    /// Turns from a count of half turns (0..=6)
    pub fn halves(count: u8) -> Result<Turns, MotionError> {
        if count > MAX_HALF_TURNS {
            return Err(MotionError::InvalidTurns {
                value: f64::from(count) / 2.0,
            });
        }
        Ok(Turns(TurnsRepr::Halves(count)))
    }

    /// Turns from a numeric count such as `1.5`
    pub fn from_f64(value: f64) -> Result<Turns, MotionError> {
        let doubled = value * 2.0;
        if !doubled.is_finite() || doubled.fract() != 0.0 || doubled < 0.0 {
            return Err(MotionError::InvalidTurns { value });
        }
        if doubled > f64::from(MAX_HALF_TURNS) {
            return Err(MotionError::InvalidTurns { value });
        }
        Self::halves(doubled as u8)
    }

    pub fn is_float(self) -> bool {
        self.0 == TurnsRepr::Float
    }

    /// Numeric turn count, or `None` for the float marker
    pub fn as_f64(self) -> Option<f64> {
        match self.0 {
            TurnsRepr::Halves(h) => Some(f64::from(h) / 2.0),
            TurnsRepr::Float => None,
        }
    }
}

impl fmt::Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TurnsRepr::Halves(h) if h % 2 == 0 => write!(f, "{}", h / 2),
            TurnsRepr::Halves(h) => write!(f, "{}.5", h / 2),
            TurnsRepr::Float => f.write_str("fl"),
        }
    }
}

impl FromStr for Turns {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "fl" {
            return Ok(Turns::FLOAT);
        }
        s.parse::<f64>()
            .ok()
            .and_then(|v| Turns::from_f64(v).ok())
            .ok_or_else(|| SymbolError::new("turns", s))
    }
}

// ============================================================================
// Motion descriptor
// ============================================================================

/// Motion kind; a float remembers what it was before it started floating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Pro,
    Anti,
    Static,
    Dash,
    Float {
        pre_float_type: MotionType,
        pre_float_rotation: RotationDirection,
    },
}

impl MotionKind {
    pub fn motion_type(self) -> MotionType {
        match self {
            MotionKind::Pro => MotionType::Pro,
            MotionKind::Anti => MotionType::Anti,
            MotionKind::Static => MotionType::Static,
            MotionKind::Dash => MotionType::Dash,
            MotionKind::Float { .. } => MotionType::Float,
        }
    }
}

impl TryFrom<MotionType> for MotionKind {
    type Error = MotionError;

    /// Plain kinds map one to one. `Float` needs its pre-float history and
    /// is rejected here.
    fn try_from(motion_type: MotionType) -> Result<Self, Self::Error> {
        match motion_type {
            MotionType::Pro => Ok(MotionKind::Pro),
            MotionType::Anti => Ok(MotionKind::Anti),
            MotionType::Static => Ok(MotionKind::Static),
            MotionType::Dash => Ok(MotionKind::Dash),
            MotionType::Float => Err(MotionError::FloatWithoutHistory),
        }
    }
}

/// Symbolic attributes of one prop's motion within a pictograph.
///
/// Float turns only ever appear on float motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MotionDescriptor {
    kind: MotionKind,
    rotation_direction: RotationDirection,
    start_location: Location,
    end_location: Location,
    turns: Turns,
    start_orientation: Orientation,
    end_orientation: Orientation,
}

impl MotionDescriptor {
    /// Create a motion with zero turns (float turns for floats) and both
    /// orientations `In`.
    pub fn new(
        kind: MotionKind,
        rotation_direction: RotationDirection,
        start_location: Location,
        end_location: Location,
    ) -> Result<Self, MotionError> {
        let turns = match kind {
            MotionKind::Float {
                pre_float_type: MotionType::Float,
                ..
            } => return Err(MotionError::NestedFloat),
            MotionKind::Float { .. } => Turns::FLOAT,
            _ => Turns::ZERO,
        };
        Ok(Self {
            kind,
            rotation_direction,
            start_location,
            end_location,
            turns,
            start_orientation: Orientation::In,
            end_orientation: Orientation::In,
        })
    }

    pub fn with_turns(mut self, turns: Turns) -> Result<Self, MotionError> {
        if turns.is_float() && self.motion_type() != MotionType::Float {
            return Err(MotionError::FloatTurnsWithoutFloat {
                motion_type: self.motion_type(),
            });
        }
        self.turns = turns;
        Ok(self)
    }

    pub fn with_orientations(mut self, start: Orientation, end: Orientation) -> Self {
        self.start_orientation = start;
        self.end_orientation = end;
        self
    }

    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    pub fn motion_type(&self) -> MotionType {
        self.kind.motion_type()
    }

    pub fn rotation_direction(&self) -> RotationDirection {
        self.rotation_direction
    }

    pub fn start_location(&self) -> Location {
        self.start_location
    }

    pub fn end_location(&self) -> Location {
        self.end_location
    }

    pub fn turns(&self) -> Turns {
        self.turns
    }

    pub fn start_orientation(&self) -> Orientation {
        self.start_orientation
    }

    pub fn end_orientation(&self) -> Orientation {
        self.end_orientation
    }

    /// The type geometry is computed for: a float places like its pre-float type.
    pub fn effective_type(&self) -> MotionType {
        match self.kind {
            MotionKind::Float { pre_float_type, .. } => pre_float_type,
            other => other.motion_type(),
        }
    }

    /// The rotation geometry is computed for: a float keeps its pre-float rotation.
    pub fn effective_rotation(&self) -> RotationDirection {
        match self.kind {
            MotionKind::Float {
                pre_float_rotation, ..
            } => pre_float_rotation,
            _ => self.rotation_direction,
        }
    }
}

// ============================================================================
// Pictograph context
// ============================================================================

/// Everything placement needs to know about the pictograph an arrow belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PictographContext {
    letter: Letter,
    grid_mode: GridMode,
    blue: Option<MotionDescriptor>,
    red: Option<MotionDescriptor>,
}

impl PictographContext {
    pub fn new(letter: Letter, grid_mode: GridMode) -> Self {
        Self {
            letter,
            grid_mode,
            blue: None,
            red: None,
        }
    }

    pub fn with_motion(mut self, color: Color, motion: MotionDescriptor) -> Self {
        match color {
            Color::Blue => self.blue = Some(motion),
            Color::Red => self.red = Some(motion),
        }
        self
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn grid_mode(&self) -> GridMode {
        self.grid_mode
    }

    pub fn motion(&self, color: Color) -> Option<&MotionDescriptor> {
        match color {
            Color::Blue => self.blue.as_ref(),
            Color::Red => self.red.as_ref(),
        }
    }

    /// The other color's motion, if present
    pub fn sibling_of(&self, color: Color) -> Option<&MotionDescriptor> {
        self.motion(color.other())
    }

    /// Motions present in this pictograph, blue first
    pub fn motions(&self) -> impl Iterator<Item = (Color, &MotionDescriptor)> {
        Color::ALL
            .iter()
            .filter_map(|&color| self.motion(color).map(|m| (color, m)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pro(start: Location, end: Location) -> MotionDescriptor {
        MotionDescriptor::new(MotionKind::Pro, RotationDirection::Clockwise, start, end).unwrap()
    }

    #[test]
    fn symbols_parse_back() {
        for &loc in Location::ALL {
            assert_eq!(loc.symbol().parse::<Location>(), Ok(loc));
        }
        assert_eq!("ccw".parse::<RotationDirection>(), Ok(RotationDirection::CounterClockwise));
        assert_eq!("box".parse::<GridMode>(), Ok(GridMode::Box));
        assert!("north".parse::<Location>().is_err());
    }

    #[test]
    fn octants_run_clockwise_from_east() {
        let order: Vec<Location> = {
            let mut locs = Location::ALL.to_vec();
            locs.sort_by_key(|l| l.clockwise_octant());
            locs
        };
        assert_eq!(
            order,
            vec![
                Location::E,
                Location::SE,
                Location::S,
                Location::SW,
                Location::W,
                Location::NW,
                Location::N,
                Location::NE,
            ]
        );
        assert!(Location::NE.is_diagonal());
        assert!(!Location::S.is_diagonal());
    }

    #[test]
    fn unit_vectors_are_normalized_and_y_down() {
        for &loc in Location::ALL {
            assert!((loc.unit_vec().length() - 1.0).abs() < 1e-12, "{loc}");
        }
        assert!(Location::N.unit_vec().y < 0.0);
        assert!(Location::S.unit_vec().y > 0.0);
    }

    #[test]
    fn turns_accept_half_steps_only() {
        assert_eq!(Turns::from_f64(1.5).unwrap().to_string(), "1.5");
        assert_eq!(Turns::from_f64(3.0).unwrap().to_string(), "3");
        assert!(Turns::from_f64(1.25).is_err());
        assert!(Turns::from_f64(3.5).is_err());
        assert!(Turns::from_f64(-0.5).is_err());
        assert!(Turns::from_f64(f64::NAN).is_err());
        assert_eq!("fl".parse::<Turns>(), Ok(Turns::FLOAT));
        assert_eq!("2.5".parse::<Turns>().unwrap().as_f64(), Some(2.5));
        assert!("two".parse::<Turns>().is_err());
    }

    #[test]
    fn float_turns_rejected_on_non_float() {
        let err = pro(Location::N, Location::E).with_turns(Turns::FLOAT).unwrap_err();
        assert_eq!(
            err,
            MotionError::FloatTurnsWithoutFloat {
                motion_type: MotionType::Pro
            }
        );
    }

    #[test]
    fn float_defaults_to_float_turns_and_resolves_effective_identity() {
        let float = MotionDescriptor::new(
            MotionKind::Float {
                pre_float_type: MotionType::Anti,
                pre_float_rotation: RotationDirection::CounterClockwise,
            },
            RotationDirection::NoRotation,
            Location::N,
            Location::E,
        )
        .unwrap();

        assert!(float.turns().is_float());
        assert_eq!(float.motion_type(), MotionType::Float);
        assert_eq!(float.effective_type(), MotionType::Anti);
        assert_eq!(float.effective_rotation(), RotationDirection::CounterClockwise);
        assert_eq!(float.rotation_direction(), RotationDirection::NoRotation);
    }

    #[test]
    fn plain_kind_conversion_rejects_float() {
        assert_eq!(MotionKind::try_from(MotionType::Dash), Ok(MotionKind::Dash));
        assert_eq!(
            MotionKind::try_from(MotionType::Float),
            Err(MotionError::FloatWithoutHistory)
        );
    }

    #[test]
    fn nested_float_rejected() {
        let err = MotionDescriptor::new(
            MotionKind::Float {
                pre_float_type: MotionType::Float,
                pre_float_rotation: RotationDirection::NoRotation,
            },
            RotationDirection::NoRotation,
            Location::N,
            Location::E,
        )
        .unwrap_err();
        assert_eq!(err, MotionError::NestedFloat);
    }

    #[test]
    fn context_motions_iterate_blue_first() {
        let ctx = PictographContext::new(Letter::A, GridMode::Diamond)
            .with_motion(Color::Red, pro(Location::S, Location::W))
            .with_motion(Color::Blue, pro(Location::N, Location::E));

        let colors: Vec<Color> = ctx.motions().map(|(c, _)| c).collect();
        assert_eq!(colors, vec![Color::Blue, Color::Red]);
        assert_eq!(ctx.sibling_of(Color::Blue).map(|m| m.start_location()), Some(Location::S));
    }
}
