//! Property tests for the placement pipeline.

use pictoplace::letter::Letter;
use pictoplace::motion::{
    Color, GridMode, Location, MotionDescriptor, MotionKind, MotionType, Orientation,
    PictographContext, RotationDirection, Turns,
};
use pictoplace::placement::{
    AdjustmentKey, AdjustmentLookup, CoordinateSystem, DefaultPlacementKey, DefaultPlacementTable,
    DirectionalTupleProcessor, LocationCalculator, SpecialPlacementTable,
};
use pictoplace::{EngineConfig, PlacementTables, Point, build_engine};
use proptest::prelude::*;
use proptest::sample::select;

// =============================================================================
// Strategies
// =============================================================================

fn motion_kind() -> impl Strategy<Value = MotionKind> {
    let pre_float_types = vec![
        MotionType::Pro,
        MotionType::Anti,
        MotionType::Static,
        MotionType::Dash,
    ];
    prop_oneof![
        Just(MotionKind::Pro),
        Just(MotionKind::Anti),
        Just(MotionKind::Static),
        Just(MotionKind::Dash),
        (select(pre_float_types), select(RotationDirection::ALL)).prop_map(
            |(pre_float_type, pre_float_rotation)| MotionKind::Float {
                pre_float_type,
                pre_float_rotation,
            }
        ),
    ]
}

fn motion() -> impl Strategy<Value = MotionDescriptor> {
    (
        motion_kind(),
        select(RotationDirection::ALL),
        select(Location::ALL),
        select(Location::ALL),
        0u8..=6,
        select(Orientation::ALL),
        select(Orientation::ALL),
    )
        .prop_map(|(kind, rotation, start, end, halves, start_ori, end_ori)| {
            let motion = MotionDescriptor::new(kind, rotation, start, end)
                .expect("non-nested kinds are valid");
            let motion = match kind {
                MotionKind::Float { .. } => motion,
                _ => motion
                    .with_turns(Turns::halves(halves).expect("0..=6 half turns"))
                    .expect("count turns are valid on any motion"),
            };
            motion.with_orientations(start_ori, end_ori)
        })
}

fn context() -> impl Strategy<Value = PictographContext> {
    (
        select(Letter::ALL),
        select(GridMode::ALL),
        proptest::option::of(motion()),
        proptest::option::of(motion()),
    )
        .prop_map(|(letter, grid_mode, blue, red)| {
            let mut ctx = PictographContext::new(letter, grid_mode);
            if let Some(m) = blue {
                ctx = ctx.with_motion(Color::Blue, m);
            }
            if let Some(m) = red {
                ctx = ctx.with_motion(Color::Red, m);
            }
            ctx
        })
}

/// A context with at least a blue motion, plus an adjustment vector
fn placed_blue() -> impl Strategy<Value = (PictographContext, Point)> {
    (context(), motion(), -60i32..60, -60i32..60).prop_map(|(ctx, fallback, x, y)| {
        let ctx = if ctx.motion(Color::Blue).is_some() {
            ctx
        } else {
            ctx.with_motion(Color::Blue, fallback)
        };
        (ctx, Point::new(f64::from(x), f64::from(y)))
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn placement_is_total_and_deterministic(ctx in context()) {
        let engine = build_engine(PlacementTables::empty(), &EngineConfig::default());
        for (color, motion) in ctx.motions() {
            let first = engine.calculate_arrow_position(motion, &ctx, ctx.letter(), color);
            let second = engine.calculate_arrow_position(motion, &ctx, ctx.letter(), color);
            prop_assert_eq!(first, second);
            prop_assert!(first.position.is_finite());
            let degrees = first.rotation.to_degrees();
            prop_assert!((0.0..360.0).contains(&degrees), "rotation {} out of range", degrees);
        }
    }

    #[test]
    fn position_is_anchor_plus_final_adjustment((ctx, base) in placed_blue()) {
        let config = EngineConfig::default();
        let motion = *ctx.motion(Color::Blue).unwrap();
        let defaults: DefaultPlacementTable =
            [(DefaultPlacementKey::for_motion(&motion), base)].into_iter().collect();
        let engine = build_engine(
            PlacementTables::new(SpecialPlacementTable::new(), defaults),
            &config,
        );

        let location = LocationCalculator::new().calculate(&motion, &ctx);
        let initial = CoordinateSystem::from_config(&config).get_initial_position(&motion, location);
        let adjustment = DirectionalTupleProcessor::from_config(&config)
            .process(base, &motion, location);
        prop_assert!(adjustment.is_ok(), "standard tables must never fail: {:?}", adjustment);
        let adjustment = adjustment.unwrap();

        let placement = engine.calculate_arrow_position(&motion, &ctx, ctx.letter(), Color::Blue);
        prop_assert_eq!(placement.position, initial + adjustment);
    }

    #[test]
    fn special_tier_always_wins((ctx, base) in placed_blue()) {
        let motion = *ctx.motion(Color::Blue).unwrap();
        let key = AdjustmentKey::for_motion(&ctx, &motion, ctx.letter(), Color::Blue);
        let special: SpecialPlacementTable = [(key, base)].into_iter().collect();
        let defaults: DefaultPlacementTable = [(
            DefaultPlacementKey::for_motion(&motion),
            base + Point::new(1000.0, 1000.0),
        )]
        .into_iter()
        .collect();
        let lookup = AdjustmentLookup::new(PlacementTables::new(special, defaults));

        prop_assert_eq!(
            lookup.get_base_adjustment(&ctx, &motion, ctx.letter(), Color::Blue),
            Ok(base)
        );
    }

    #[test]
    fn quadrant_index_stays_in_range(m in motion(), location in select(Location::ALL)) {
        let tuples = DirectionalTupleProcessor::default();
        let candidates = tuples.generate(Point::new(7.0, 3.0), &m).unwrap();
        let index = tuples.quadrant_index(&m, location, candidates.len()).unwrap();
        prop_assert!(index >= 0);
        prop_assert!((index as usize) < candidates.len());
    }

    #[test]
    fn batch_matches_sequential(contexts in proptest::collection::vec(context(), 0..40)) {
        let engine = build_engine(PlacementTables::empty(), &EngineConfig::default());
        let sequential: Vec<_> = contexts.iter().map(|c| engine.place_pictograph(c)).collect();
        prop_assert_eq!(engine.place_batch(&contexts), sequential);
    }
}
