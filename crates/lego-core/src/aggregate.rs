//! Coverage-weighted aggregation of per-publisher agreement vectors.

use crate::action::Action;
use crate::generator::{agreement_for_publisher, round_to};
use crate::publisher::Publisher;
use crate::seed::publisher_seed;

/// Returned when the filtered publisher set is empty; an empty filter is
/// not an error.
pub const EMPTY_FILTER_FALLBACK: [f64; 3] = [0.333, 0.333, 0.334];

/// Aggregate `[supporting, non_supporting, neutral]` for one action over
/// the given publisher set.
///
/// Every publisher is weighted by the action's own coverage, which is
/// constant within one action, so this is effectively an unweighted mean.
/// The dashboard has always computed it this way and downstream consumers
/// expect the resulting values; changing to a true per-publisher weight
/// would be a behavior change, not a fix.
pub fn aggregate_agreement(
    action: &Action,
    publishers: &[&Publisher],
    day_seed: u64,
    action_index: usize,
) -> [f64; 3] {
    let mut totals = [0.0_f64; 3];
    let mut total_weight = 0.0_f64;

    for publisher in publishers {
        let pub_seed = publisher_seed(day_seed, &publisher.id, action_index);
        let agreement = agreement_for_publisher(publisher, action, pub_seed);
        let weight = action.coverage;
        for (total, component) in totals.iter_mut().zip(agreement) {
            *total += component * weight;
        }
        total_weight += weight;
    }

    if total_weight > 0.0 {
        [
            round_to(totals[0] / total_weight, 3),
            round_to(totals[1] / total_weight, 3),
            round_to(totals[2] / total_weight, 3),
        ]
    } else {
        EMPTY_FILTER_FALLBACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_action;
    use crate::publisher::PublisherRegistry;

    const SEED: u64 = 20_250_726;

    #[test]
    fn empty_publisher_set_yields_fallback() {
        let action = generate_action(0, 0.1, SEED);
        let result = aggregate_agreement(&action, &[], SEED, 0);
        assert_eq!(result, EMPTY_FILTER_FALLBACK);
    }

    #[test]
    fn single_publisher_aggregate_equals_its_own_agreement() {
        let registry = PublisherRegistry::new();
        let publisher = &registry.all()[7];
        let action = generate_action(2, 0.08, SEED);

        let pub_seed = publisher_seed(SEED, &publisher.id, 2);
        let own = agreement_for_publisher(publisher, &action, pub_seed);
        let aggregated = aggregate_agreement(&action, &[publisher], SEED, 2);
        assert_eq!(aggregated, own);
    }

    #[test]
    fn aggregate_sums_to_one_within_rounding() {
        let registry = PublisherRegistry::new();
        let publishers = registry.filter(None);
        for index in 0..4 {
            let action = generate_action(index, 0.05, SEED);
            let [s, ns, n] = aggregate_agreement(&action, &publishers, SEED, index);
            let total = s + ns + n;
            assert!((total - 1.0).abs() < 0.002, "action {index}: sum {total}");
        }
    }

    #[test]
    fn aggregate_is_deterministic() {
        let registry = PublisherRegistry::new();
        let publishers = registry.filter(Some("Democrat"));
        let action = generate_action(1, 0.09, SEED);
        assert_eq!(
            aggregate_agreement(&action, &publishers, SEED, 1),
            aggregate_agreement(&action, &publishers, SEED, 1)
        );
    }

    #[test]
    fn leaning_subsets_disagree_with_each_other() {
        let registry = PublisherRegistry::new();
        let action = generate_action(0, 0.1, SEED);
        let reps = aggregate_agreement(&action, &registry.filter(Some("Republican")), SEED, 0);
        let dems = aggregate_agreement(&action, &registry.filter(Some("Democrat")), SEED, 0);
        assert_ne!(reps, dems);
        // Action A leans Republican on this date, so the aligned side
        // supports it more.
        assert!(action.republican_score > 0.0);
        assert!(reps[0] > dems[0]);
    }
}
