//! Seed derivation for the deterministic generator.
//!
//! Every pseudo-random draw in this crate comes from a `StdRng` constructed
//! from an explicit seed derived here. Nothing reads the OS entropy source,
//! so the same (date, filter) inputs always produce the same output, and
//! concurrent requests never share generator state.

use chrono::{Datelike, NaiveDate};

use crate::error::{LegoError, Result};

/// Parse a `YYYY-MM-DD` string and derive the per-day seed: the decimal
/// concatenation of year, month, and day (2025-07-26 → 20250726).
pub fn date_seed(date_str: &str) -> Result<u64> {
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| LegoError::InvalidDate(date_str.to_string()))?;
    Ok(date.year() as u64 * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day()))
}

/// FNV-1a 64-bit. The per-publisher seed must survive process restarts, so
/// this cannot be `DefaultHasher` (randomized per process).
pub fn stable_hash(s: &str) -> u64 {
    const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET_BASIS;
    for byte in s.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Seed for one (date, publisher, action) triple.
pub fn publisher_seed(day_seed: u64, publisher_id: &str, action_index: usize) -> u64 {
    day_seed
        .wrapping_add(stable_hash(publisher_id))
        .wrapping_add(action_index as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_seed_concatenates_year_month_day() {
        assert_eq!(date_seed("2025-07-26").unwrap(), 20_250_726);
        assert_eq!(date_seed("2025-01-01").unwrap(), 20_250_101);
        assert_eq!(date_seed("1999-12-31").unwrap(), 19_991_231);
    }

    #[test]
    fn date_seed_rejects_malformed_input() {
        for bad in ["2025-13-40", "2025-02-30", "not-a-date", "2025/07/26", ""] {
            let err = date_seed(bad).unwrap_err();
            assert!(matches!(err, LegoError::InvalidDate(_)), "accepted {bad:?}");
        }
    }

    #[test]
    fn invalid_date_error_message_names_the_input() {
        let err = date_seed("2025-13-40").unwrap_err();
        assert!(err.to_string().contains("2025-13-40"));
    }

    #[test]
    fn stable_hash_matches_fnv1a_test_vectors() {
        // Published FNV-1a 64-bit vectors.
        assert_eq!(stable_hash(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(stable_hash("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(stable_hash("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn stable_hash_is_stable_across_calls() {
        assert_eq!(stable_hash("pub_rep_0"), stable_hash("pub_rep_0"));
        assert_ne!(stable_hash("pub_rep_0"), stable_hash("pub_rep_1"));
    }

    #[test]
    fn publisher_seed_varies_by_all_inputs() {
        let base = publisher_seed(20_250_726, "pub_rep_0", 0);
        assert_eq!(base, publisher_seed(20_250_726, "pub_rep_0", 0));
        assert_ne!(base, publisher_seed(20_250_727, "pub_rep_0", 0));
        assert_ne!(base, publisher_seed(20_250_726, "pub_rep_1", 0));
        assert_ne!(base, publisher_seed(20_250_726, "pub_rep_0", 1));
    }
}
