//! Placement adjustment lookup.
//!
//! Two tiers are probed in order:
//! - the **special** tier, keyed by the full pictograph context
//!   (grid mode, orientation key, letter, turns of both colors, color)
//! - the **default** tier, keyed only by motion type, rotation direction
//!   and turns
//!
//! A special entry always wins. When neither tier has an entry the lookup
//! reports a [`LookupMiss`] instead of inventing a value.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::errors::LookupMiss;
use crate::letter::Letter;
use crate::log;
use crate::motion::{
    Color, GridMode, MotionDescriptor, MotionType, Orientation, PictographContext,
    RotationDirection, Turns,
};
use crate::types::Point;

// ============================================================================
// Keys
// ============================================================================

/// Orientation part of a special placement key.
///
/// Encodes the motion's own start and end orientation, and whether the
/// sibling motion ends in a different orientation (a "split" pictograph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrientationKey {
    pub start: Orientation,
    pub end: Orientation,
    pub split: bool,
}

impl OrientationKey {
    pub fn new(start: Orientation, end: Orientation) -> Self {
        Self {
            start,
            end,
            split: false,
        }
    }

    pub fn split(start: Orientation, end: Orientation) -> Self {
        Self {
            start,
            end,
            split: true,
        }
    }

    pub fn for_motion(motion: &MotionDescriptor, sibling: Option<&MotionDescriptor>) -> Self {
        let split = sibling.is_some_and(|s| s.end_orientation() != motion.end_orientation());
        Self {
            start: motion.start_orientation(),
            end: motion.end_orientation(),
            split,
        }
    }
}

impl fmt::Display for OrientationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.start, self.end)?;
        if self.split {
            f.write_str("_split")?;
        }
        Ok(())
    }
}

/// Turns of both colors, blue first regardless of which arrow is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnsTuple {
    pub blue: Option<Turns>,
    pub red: Option<Turns>,
}

impl TurnsTuple {
    pub fn new(blue: Option<Turns>, red: Option<Turns>) -> Self {
        Self { blue, red }
    }

    /// Both colors present
    pub fn pair(blue: Turns, red: Turns) -> Self {
        Self::new(Some(blue), Some(red))
    }

    pub fn from_context(context: &PictographContext) -> Self {
        Self {
            blue: context.motion(Color::Blue).map(|m| m.turns()),
            red: context.motion(Color::Red).map(|m| m.turns()),
        }
    }
}

impl fmt::Display for TurnsTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part(t: Option<Turns>) -> String {
            t.map_or_else(|| "_".to_string(), |t| t.to_string())
        }
        write!(f, "({}, {})", part(self.blue), part(self.red))
    }
}

/// Key into the special placement tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjustmentKey {
    pub grid_mode: GridMode,
    pub orientation_key: OrientationKey,
    pub letter: Letter,
    pub turns: TurnsTuple,
    pub color: Color,
}

impl AdjustmentKey {
    /// Derive the key for placing `motion` as the `color` arrow of `context`.
    pub fn for_motion(
        context: &PictographContext,
        motion: &MotionDescriptor,
        letter: Letter,
        color: Color,
    ) -> Self {
        Self {
            grid_mode: context.grid_mode(),
            orientation_key: OrientationKey::for_motion(motion, context.sibling_of(color)),
            letter,
            turns: TurnsTuple::from_context(context),
            color,
        }
    }
}

impl fmt::Display for AdjustmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.grid_mode, self.orientation_key, self.letter, self.turns, self.color
        )
    }
}

/// Key into the letter-agnostic default tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultPlacementKey {
    pub motion_type: MotionType,
    pub rotation_direction: RotationDirection,
    pub turns: Turns,
}

impl DefaultPlacementKey {
    pub fn new(motion_type: MotionType, rotation_direction: RotationDirection, turns: Turns) -> Self {
        Self {
            motion_type,
            rotation_direction,
            turns,
        }
    }

    pub fn for_motion(motion: &MotionDescriptor) -> Self {
        Self::new(motion.motion_type(), motion.rotation_direction(), motion.turns())
    }
}

impl fmt::Display for DefaultPlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.motion_type, self.rotation_direction, self.turns)
    }
}

// ============================================================================
// Table providers
// ============================================================================

/// Read-only source of special (per letter) placements
pub trait SpecialPlacements: Send + Sync + fmt::Debug {
    fn special_adjustment(&self, key: &AdjustmentKey) -> Option<Point>;
}

/// Read-only source of default (letter-agnostic) placements
pub trait DefaultPlacements: Send + Sync + fmt::Debug {
    fn default_adjustment(&self, key: &DefaultPlacementKey) -> Option<Point>;
}

type ColorEntries = HashMap<Color, Point>;
type TurnsEntries = HashMap<TurnsTuple, ColorEntries>;
type LetterEntries = HashMap<Letter, TurnsEntries>;
type OrientationEntries = HashMap<OrientationKey, LetterEntries>;

/// In-memory special placements:
/// `grid mode → orientation key → letter → turns → color → adjustment`
#[derive(Debug, Clone, Default)]
pub struct SpecialPlacementTable {
    entries: HashMap<GridMode, OrientationEntries>,
    len: usize,
}

impl SpecialPlacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the adjustment for `key`.
    pub fn insert(&mut self, key: AdjustmentKey, adjustment: Point) {
        let previous = self
            .entries
            .entry(key.grid_mode)
            .or_default()
            .entry(key.orientation_key)
            .or_default()
            .entry(key.letter)
            .or_default()
            .entry(key.turns)
            .or_default()
            .insert(key.color, adjustment);
        if previous.is_none() {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl SpecialPlacements for SpecialPlacementTable {
    fn special_adjustment(&self, key: &AdjustmentKey) -> Option<Point> {
        self.entries
            .get(&key.grid_mode)?
            .get(&key.orientation_key)?
            .get(&key.letter)?
            .get(&key.turns)?
            .get(&key.color)
            .copied()
    }
}

impl FromIterator<(AdjustmentKey, Point)> for SpecialPlacementTable {
    fn from_iter<I: IntoIterator<Item = (AdjustmentKey, Point)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, adjustment) in iter {
            table.insert(key, adjustment);
        }
        table
    }
}

/// In-memory default placements
#[derive(Debug, Clone, Default)]
pub struct DefaultPlacementTable {
    entries: HashMap<DefaultPlacementKey, Point>,
}

impl DefaultPlacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: DefaultPlacementKey, adjustment: Point) {
        self.entries.insert(key, adjustment);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DefaultPlacements for DefaultPlacementTable {
    fn default_adjustment(&self, key: &DefaultPlacementKey) -> Option<Point> {
        self.entries.get(key).copied()
    }
}

impl FromIterator<(DefaultPlacementKey, Point)> for DefaultPlacementTable {
    fn from_iter<I: IntoIterator<Item = (DefaultPlacementKey, Point)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Shared, read-only handles to both placement tiers.
#[derive(Debug, Clone)]
pub struct PlacementTables {
    special: Arc<dyn SpecialPlacements>,
    defaults: Arc<dyn DefaultPlacements>,
}

impl PlacementTables {
    pub fn new(
        special: impl SpecialPlacements + 'static,
        defaults: impl DefaultPlacements + 'static,
    ) -> Self {
        Self::from_shared(Arc::new(special), Arc::new(defaults))
    }

    /// Wrap providers that are already shared elsewhere
    pub fn from_shared(
        special: Arc<dyn SpecialPlacements>,
        defaults: Arc<dyn DefaultPlacements>,
    ) -> Self {
        Self { special, defaults }
    }

    /// Tables with no entries; every lookup misses
    pub fn empty() -> Self {
        Self::new(SpecialPlacementTable::new(), DefaultPlacementTable::new())
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Two-tier adjustment lookup
#[derive(Debug, Clone)]
pub struct AdjustmentLookup {
    tables: PlacementTables,
}

impl AdjustmentLookup {
    pub fn new(tables: PlacementTables) -> Self {
        Self { tables }
    }

    /// Base adjustment for the `color` arrow of a pictograph.
    pub fn get_base_adjustment(
        &self,
        context: &PictographContext,
        motion: &MotionDescriptor,
        letter: Letter,
        color: Color,
    ) -> Result<Point, LookupMiss> {
        let special = AdjustmentKey::for_motion(context, motion, letter, color);
        if let Some(adjustment) = self.tables.special.special_adjustment(&special) {
            log::debug!(key = %special, %adjustment, "special placement");
            return Ok(adjustment);
        }

        let default = DefaultPlacementKey::for_motion(motion);
        if let Some(adjustment) = self.tables.defaults.default_adjustment(&default) {
            log::debug!(key = %default, %adjustment, "default placement");
            return Ok(adjustment);
        }

        Err(LookupMiss { special, default })
    }
}
