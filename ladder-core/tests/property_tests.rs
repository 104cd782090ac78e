//! Property tests for ladder invariants.
//!
//! Uses proptest to verify:
//! 1. Shape: generated ladders have the requested rows and widths
//! 2. Adjacency: no row ever has two neighbouring rungs
//! 3. Determinism: traversal is a pure function of ladder and start
//! 4. Permutation: every landing slot is reached by exactly one start
//! 5. Width bounds: exactly 1..=99 is accepted

use ladder_core::domain::{Height, Width};
use ladder_core::ladder::{generate_ladder, generate_row, resolve, RandomRungs, ScriptedRungs};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_width() -> impl Strategy<Value = usize> {
    Width::MIN..=Width::MAX
}

fn arb_height() -> impl Strategy<Value = usize> {
    1usize..=60
}

// ── 1 & 2. Shape and adjacency ───────────────────────────────────────

proptest! {
    #[test]
    fn generated_ladder_has_shape_and_no_adjacent_rungs(
        width in arb_width(),
        height in arb_height(),
        seed in any::<u64>(),
    ) {
        let mut source = RandomRungs::new(StdRng::seed_from_u64(seed));
        let ladder = generate_ladder(
            Height::new(height).unwrap(),
            Width::new(width).unwrap(),
            &mut source,
        );

        prop_assert_eq!(ladder.height(), height);
        prop_assert_eq!(ladder.width(), width);
        for row in ladder.rows() {
            prop_assert_eq!(row.width(), width);
            prop_assert!(!row.rungs().windows(2).any(|p| p[0] && p[1]));
        }
    }

    /// Whatever the draws, a kept rung is always a drawn `true` after a gap.
    #[test]
    fn row_keeps_draws_only_after_gaps(draws in prop::collection::vec(any::<bool>(), 1..100)) {
        let mut source = ScriptedRungs::new(draws.clone());
        let row = generate_row(draws.len(), &mut source);

        let mut previous = false;
        for (i, &placed) in row.rungs().iter().enumerate() {
            prop_assert_eq!(placed, draws[i] && !previous);
            previous = placed;
        }
    }
}

// ── 3 & 4. Traversal ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn resolve_is_deterministic_and_in_range(
        width in arb_width(),
        height in arb_height(),
        seed in any::<u64>(),
    ) {
        let mut source = RandomRungs::new(StdRng::seed_from_u64(seed));
        let ladder = generate_ladder(
            Height::new(height).unwrap(),
            Width::new(width).unwrap(),
            &mut source,
        );

        for start in 0..=width {
            let first = resolve(&ladder, start).unwrap();
            let second = resolve(&ladder, start).unwrap();
            prop_assert_eq!(first, second);
            prop_assert!(first <= width);
        }
        prop_assert!(resolve(&ladder, width + 1).is_err());
    }

    #[test]
    fn landing_slots_form_a_permutation(
        width in arb_width(),
        height in arb_height(),
        seed in any::<u64>(),
    ) {
        let mut source = RandomRungs::new(StdRng::seed_from_u64(seed));
        let ladder = generate_ladder(
            Height::new(height).unwrap(),
            Width::new(width).unwrap(),
            &mut source,
        );

        let mut landed = ladder.destinations();
        prop_assert_eq!(landed.len(), width + 1);
        landed.sort_unstable();
        prop_assert_eq!(landed, (0..=width).collect::<Vec<_>>());
    }
}

// ── 5. Width bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn width_accepts_exactly_the_valid_range(value in 0usize..200) {
        let accepted = Width::new(value).is_ok();
        prop_assert_eq!(accepted, (1..=99).contains(&value));
    }
}
