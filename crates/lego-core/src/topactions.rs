//! Top-actions orchestration: the full per-request generation pipeline.

use crate::action::Action;
use crate::aggregate::aggregate_agreement;
use crate::error::Result;
use crate::generator::{coverage_shares, generate_action, ACTION_COUNT};
use crate::publisher::PublisherRegistry;
use crate::seed::date_seed;

/// Generate the 26 actions for one date, with agreement aggregated over the
/// publishers selected by `criterion` (see [`PublisherRegistry::filter`]).
///
/// The result is sorted by coverage descending; ties keep generation-index
/// order (the sort is stable), so output is fully determined by the inputs.
pub fn generate_top_actions(
    registry: &PublisherRegistry,
    date_str: &str,
    criterion: Option<&str>,
) -> Result<Vec<Action>> {
    let day_seed = date_seed(date_str)?;
    let shares = coverage_shares(day_seed);

    let mut actions = Vec::with_capacity(ACTION_COUNT);
    for (index, share) in shares.iter().enumerate() {
        let mut action = generate_action(index, *share, day_seed);
        // Filtering is pure, so recomputing it per action is harmless.
        let publishers = registry.filter(criterion);
        action.agreement = aggregate_agreement(&action, &publishers, day_seed, index);
        actions.push(action);
    }

    actions.sort_by(|a, b| b.coverage.total_cmp(&a.coverage));
    Ok(actions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
