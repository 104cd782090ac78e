//! Randomized ladder generation.
//!
//! Rows are built left to right with a single "previous position had a rung"
//! flag: when it is set the current position is forced empty, otherwise the
//! drawn value is kept. One draw is consumed per position either way, so a
//! row of width `w` always consumes exactly `w` draws.

use rand::Rng;
use std::collections::VecDeque;

use super::{Ladder, RungRow};
use crate::domain::{Height, Width};

/// Source of per-position rung decisions.
pub trait RungSource {
    /// Draw the candidate value for the next position.
    fn draw(&mut self) -> bool;
}

/// Fair coin flips from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomRungs<R> {
    rng: R,
}

impl<R: Rng> RandomRungs<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RungSource for RandomRungs<R> {
    fn draw(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Replays a fixed sequence of draws, then yields `false` forever.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRungs {
    draws: VecDeque<bool>,
}

impl ScriptedRungs {
    pub fn new(draws: impl IntoIterator<Item = bool>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RungSource for ScriptedRungs {
    fn draw(&mut self) -> bool {
        self.draws.pop_front().unwrap_or(false)
    }
}

/// Build one row of `width` positions. Width 0 yields an empty row.
pub fn generate_row<S: RungSource + ?Sized>(width: usize, source: &mut S) -> RungRow {
    let mut rungs = Vec::with_capacity(width);
    let mut previous = false;
    for _ in 0..width {
        let candidate = source.draw();
        let placed = candidate && !previous;
        rungs.push(placed);
        previous = placed;
    }
    RungRow::from_generated(rungs)
}

/// Build a ladder of `height` rows, each `width` positions wide.
pub fn generate_ladder<S: RungSource + ?Sized>(
    height: Height,
    width: Width,
    source: &mut S,
) -> Ladder {
    let rows: Vec<RungRow> = (0..height.value())
        .map(|_| generate_row(width.value(), source))
        .collect();
    log::debug!(
        "generated ladder: height={} width={} rungs={}",
        height,
        width,
        rows.iter()
            .map(|r| r.rungs().iter().filter(|&&b| b).count())
            .sum::<usize>()
    );
    Ladder {
        width: width.value(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn previous_rung_forces_gap() {
        let mut source = ScriptedRungs::new([true, true, true, true]);
        let row = generate_row(4, &mut source);
        assert_eq!(row.rungs(), &[true, false, true, false]);
    }

    #[test]
    fn draw_is_kept_after_gap() {
        let mut source = ScriptedRungs::new([false, true, false, false, true]);
        let row = generate_row(5, &mut source);
        assert_eq!(row.rungs(), &[false, true, false, false, true]);
    }

    #[test]
    fn one_draw_per_position() {
        let mut source = ScriptedRungs::new([true; 10]);
        generate_row(3, &mut source);
        assert_eq!(source.remaining(), 7);
    }

    #[test]
    fn zero_width_row_is_empty() {
        let mut source = ScriptedRungs::new([true]);
        let row = generate_row(0, &mut source);
        assert_eq!(row.width(), 0);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn ladder_has_requested_shape() {
        let mut source = RandomRungs::new(StdRng::seed_from_u64(7));
        let ladder = generate_ladder(
            Height::new(6).unwrap(),
            Width::new(4).unwrap(),
            &mut source,
        );
        assert_eq!(ladder.height(), 6);
        assert_eq!(ladder.width(), 4);
        for row in ladder.rows() {
            assert_eq!(row.width(), 4);
            assert!(!row.rungs().windows(2).any(|p| p[0] && p[1]));
        }
    }

    #[test]
    fn same_seed_same_ladder() {
        let height = Height::new(10).unwrap();
        let width = Width::new(9).unwrap();
        let a = generate_ladder(height, width, &mut RandomRungs::new(StdRng::seed_from_u64(3)));
        let b = generate_ladder(height, width, &mut RandomRungs::new(StdRng::seed_from_u64(3)));
        assert_eq!(a, b);
    }

    #[test]
    fn works_through_trait_object() {
        let mut source = ScriptedRungs::new([true]);
        let dyn_source: &mut dyn RungSource = &mut source;
        let row = generate_row(2, dyn_source);
        assert_eq!(row.rungs(), &[true, false]);
    }
}
