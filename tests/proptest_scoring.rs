//! Property-based tests for the scoring primitives.
//!
//! Banding must be monotonic over ascending tables, weighted means must stay
//! within the range of their inputs, and fusion of in-range scores must land
//! on the tier scale.

use proptest::prelude::*;
use soc_maturity::fusion::TIER_BANDS;
use soc_maturity::purple::{LEVEL_BANDS, MTTD_BANDS, MTTR_BANDS};
use soc_maturity::scoring::{band, weighted_mean};
use soc_maturity::{fuse, FusionWeights, MaturityLevel, MaturityTier};

/// Position of a tier on the scale
fn tier_rank(tier: MaturityTier) -> usize {
    TIER_BANDS
        .iter()
        .position(|&(_, t)| t == tier)
        .unwrap_or(usize::MAX)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn level_band_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_level: MaturityLevel = band(lo, LEVEL_BANDS).unwrap();
        let hi_level: MaturityLevel = band(hi, LEVEL_BANDS).unwrap();
        prop_assert!(lo_level <= hi_level);
    }

    #[test]
    fn duration_bands_never_reward_slower_teams(a in 0.0f64..=86_400.0, b in 0.0f64..=86_400.0) {
        let (fast, slow) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(band(fast, MTTD_BANDS).unwrap() >= band(slow, MTTD_BANDS).unwrap());
        prop_assert!(band(fast, MTTR_BANDS).unwrap() >= band(slow, MTTR_BANDS).unwrap());
    }

    #[test]
    fn band_falls_back_to_last_entry(value in 1.0e6f64..1.0e12) {
        prop_assert_eq!(band(value, MTTD_BANDS), Some(20.0));
        prop_assert_eq!(band(value, MTTR_BANDS), Some(40.0));
    }

    #[test]
    fn weighted_mean_within_bounds(
        pairs in prop::collection::vec((0.0f64..=1.0, 0.0f64..=1.3), 1..20)
    ) {
        let mean = weighted_mean(pairs.iter().copied());
        let weighted: Vec<f64> = pairs.iter().filter(|(_, w)| *w > 0.0).map(|(v, _)| *v).collect();
        if weighted.is_empty() {
            prop_assert_eq!(mean, 0.0);
        } else {
            let min = weighted.iter().copied().fold(f64::INFINITY, f64::min);
            let max = weighted.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean >= min - 1e-9 && mean <= max + 1e-9, "{} not in [{}, {}]", mean, min, max);
        }
    }

    #[test]
    fn weighted_mean_zero_weights_is_zero(values in prop::collection::vec(-10.0f64..10.0, 0..10)) {
        prop_assert_eq!(weighted_mean(values.iter().map(|&v| (v, 0.0))), 0.0);
    }

    #[test]
    fn fusion_of_unit_scores_is_determined(
        governance in 0.0f64..=1.0,
        purple in 0.0f64..=1.0,
        alpha in 0.0f64..=1.0,
    ) {
        let result = fuse(governance, purple, FusionWeights::new(alpha, 1.0 - alpha));
        prop_assert!(result.fused >= -1e-12 && result.fused <= 1.0 + 1e-12);
        prop_assert!(result.fused >= governance.min(purple) - 1e-9);
        prop_assert!(result.fused <= governance.max(purple) + 1e-9);
        prop_assert!(result.tier.is_determined());
    }

    #[test]
    fn tier_is_monotonic(a in 0.0f64..1.01, b in 0.0f64..1.01) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_rank(MaturityTier::from_score(lo)) <= tier_rank(MaturityTier::from_score(hi)));
    }

    #[test]
    fn out_of_scale_fusion_is_undetermined(score in prop_oneof![-10.0f64..-1e-9, 1.01f64..10.0]) {
        prop_assert_eq!(MaturityTier::from_score(score), MaturityTier::Undetermined);
    }
}
