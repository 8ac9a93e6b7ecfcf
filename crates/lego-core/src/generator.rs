//! Per-date data generation: coverage shares, action records, and
//! per-publisher agreement vectors.
//!
//! Each function constructs its own `StdRng` from an explicit seed and draws
//! in a fixed order, so output is reproducible across runs and platforms for
//! a given crate version. Determinism is per implementation: we pin the draw
//! order and the `rand` major version rather than promising bit
//! compatibility with any other stack.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::action::Action;
use crate::publisher::{Leaning, Publisher};

/// Actions generated per date, labeled `Action A` through `Action Z`.
pub const ACTION_COUNT: usize = 26;

/// Indices below this draw a positive (Republican-leaning) score; the rest
/// draw a negative one.
pub const REPUBLICAN_ACTIONS: usize = 13;

/// Round to `places` decimal digits, half away from zero.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Coverage shares for the 26 actions of one date: a harmonic base curve
/// `1/(i+1)` perturbed by uniform noise in [0.8, 1.2), normalized to sum
/// to 1.
pub fn coverage_shares(seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<f64> = (0..ACTION_COUNT)
        .map(|i| 1.0 / (i as f64 + 1.0))
        .collect();
    for value in &mut values {
        *value *= rng.gen_range(0.8..1.2);
    }
    let total: f64 = values.iter().sum();
    for value in &mut values {
        *value /= total;
    }
    values
}

/// Generate one action record. `agreement` is left zeroed; the aggregator
/// fills it in from the publisher roster.
pub fn generate_action(index: usize, coverage: f64, day_seed: u64) -> Action {
    let mut rng = StdRng::seed_from_u64(day_seed.wrapping_add(index as u64));
    let score = if index < REPUBLICAN_ACTIONS {
        rng.gen_range(0.0..1.0)
    } else {
        rng.gen_range(-1.0..0.0)
    };
    Action {
        description: format!("Action {}", (b'A' + index as u8) as char),
        republican_score: round_to(score, 3),
        coverage: round_to(coverage, 4),
        agreement: [0.0; 3],
    }
}

/// One publisher's `[supporting, non_supporting, neutral]` split for an
/// action.
///
/// A publisher whose leaning matches the sign of the action's score draws
/// its supporting share from the high band [0.5, 1.0); otherwise from the
/// low band [0.0, 0.5). `non_supporting` is the remainder of the unit
/// total and is deliberately not clamped.
pub fn agreement_for_publisher(publisher: &Publisher, action: &Action, pub_seed: u64) -> [f64; 3] {
    let mut rng = StdRng::seed_from_u64(pub_seed);

    let neutral = rng.gen_range(0.1..0.5);

    let publisher_is_republican = publisher.leaning == Leaning::Republican;
    let action_is_republican = action.republican_score > 0.0;
    let aligned = publisher_is_republican == action_is_republican;

    let supporting = if aligned {
        rng.gen_range(0.5..1.0) * (1.0 - neutral)
    } else {
        rng.gen_range(0.0..0.5) * (1.0 - neutral)
    };
    let non_supporting = 1.0 - neutral - supporting;

    [
        round_to(supporting, 3),
        round_to(non_supporting, 3),
        round_to(neutral, 3),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
