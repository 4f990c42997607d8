//! Governance and Purple Team score fusion.
//!
//! The fused index is a weighted sum of the governance score and the
//! normalized Purple Team score, mapped to a maturity tier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scoring::{band, Band};

/// Weights of the two assessments in the fused index.
///
/// The weights are expected to sum to 1; configuration validation checks
/// this, [`fuse`] does not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FusionWeights {
    /// Weight of the governance score (α)
    pub governance: f64,
    /// Weight of the Purple Team score (β)
    pub purple: f64,
}

impl FusionWeights {
    #[must_use]
    pub const fn new(governance: f64, purple: f64) -> Self {
        Self { governance, purple }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.governance + self.purple
    }
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self::new(0.6, 0.4)
    }
}

/// Maturity tier of the fused index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaturityTier {
    /// [0, 0.2)
    Initial,
    /// [0.2, 0.4)
    Structurant,
    /// [0.4, 0.6)
    Stabilise,
    /// [0.6, 0.8)
    Pilote,
    /// [0.8, 0.9)
    TransformantDebutant,
    /// [0.9, 1.01)
    TransformantAvance,
    /// Negative, NaN, or 1.01 and above
    Undetermined,
}

/// Fused index to tier. The leading and trailing entries catch values outside
/// [0, 1.01) and NaN.
pub const TIER_BANDS: &[Band<MaturityTier>] = &[
    (0.0, MaturityTier::Undetermined),
    (0.2, MaturityTier::Initial),
    (0.4, MaturityTier::Structurant),
    (0.6, MaturityTier::Stabilise),
    (0.8, MaturityTier::Pilote),
    (0.9, MaturityTier::TransformantDebutant),
    (1.01, MaturityTier::TransformantAvance),
    (f64::INFINITY, MaturityTier::Undetermined),
];

impl MaturityTier {
    /// Tier for a fused index
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        band(score, TIER_BANDS).unwrap_or(Self::Undetermined)
    }

    /// Short level name, e.g. `Niveau 3`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Niveau 0–1",
            Self::Structurant => "Niveau 1",
            Self::Stabilise => "Niveau 2",
            Self::Pilote => "Niveau 3",
            Self::TransformantDebutant => "Niveau 4",
            Self::TransformantAvance => "Niveau 5",
            Self::Undetermined => "Non déterminé",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Structurant => "Structurant",
            Self::Stabilise => "Stabilisé",
            Self::Pilote => "Piloté",
            Self::TransformantDebutant => "Transformant débutant",
            Self::TransformantAvance => "Transformant avancé",
            Self::Undetermined => "Score hors de l'échelle",
        }
    }

    #[must_use]
    pub const fn is_determined(&self) -> bool {
        !matches!(self, Self::Undetermined)
    }
}

impl std::fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_determined() {
            write!(f, "{} ({})", self.label(), self.description())
        } else {
            f.write_str(self.label())
        }
    }
}

/// Outcome of fusing both assessments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct FusionResult {
    /// Governance score in [0, 1]
    pub governance: f64,
    /// Purple Team score in [0, 1]
    pub purple: f64,
    pub weights: FusionWeights,
    /// α·governance + β·purple
    pub fused: f64,
    pub tier: MaturityTier,
}

/// Fuse a governance score and a normalized Purple Team score.
///
/// Both scores are expected in [0, 1]. Out-of-range input is not rejected; it
/// surfaces as [`MaturityTier::Undetermined`] when the fused index leaves the
/// tier scale.
pub fn fuse(governance: f64, purple: f64, weights: FusionWeights) -> FusionResult {
    let fused = weights.governance * governance + weights.purple * purple;
    let tier = MaturityTier::from_score(fused);
    if tier.is_determined() {
        tracing::info!("Fused maturity index {:.4}: {}", fused, tier);
    } else {
        tracing::warn!("Fused maturity index {} is outside the tier scale", fused);
    }
    FusionResult {
        governance,
        purple,
        weights,
        fused,
        tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        assert!((FusionWeights::default().total() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(MaturityTier::from_score(0.9), MaturityTier::TransformantAvance);
        assert_eq!(
            MaturityTier::from_score(0.89999),
            MaturityTier::TransformantDebutant
        );
        assert_eq!(MaturityTier::from_score(0.0), MaturityTier::Initial);
        assert_eq!(MaturityTier::from_score(0.2), MaturityTier::Structurant);
        assert_eq!(MaturityTier::from_score(0.6), MaturityTier::Pilote);
        assert_eq!(MaturityTier::from_score(1.0), MaturityTier::TransformantAvance);
        assert_eq!(MaturityTier::from_score(1.009), MaturityTier::TransformantAvance);
    }

    #[test]
    fn test_out_of_scale_is_undetermined() {
        assert_eq!(MaturityTier::from_score(-0.01), MaturityTier::Undetermined);
        assert_eq!(MaturityTier::from_score(1.01), MaturityTier::Undetermined);
        assert_eq!(MaturityTier::from_score(f64::NAN), MaturityTier::Undetermined);
        assert!(!MaturityTier::from_score(5.0).is_determined());
    }

    #[test]
    fn test_fuse_weighted_sum() {
        let result = fuse(0.82, 0.75, FusionWeights::default());
        assert!((result.fused - 0.792).abs() < 1e-9);
        // 0.792 lies in [0.6, 0.8)
        assert_eq!(result.tier, MaturityTier::Pilote);
        assert_eq!(result.tier.to_string(), "Niveau 3 (Piloté)");
    }

    #[test]
    fn test_fuse_custom_weights() {
        let result = fuse(1.0, 0.0, FusionWeights::new(0.5, 0.5));
        assert!((result.fused - 0.5).abs() < 1e-12);
        assert_eq!(result.tier.label(), "Niveau 2");
    }

    #[test]
    fn test_fuse_does_not_enforce_weight_sum() {
        let result = fuse(1.0, 1.0, FusionWeights::new(1.0, 1.0));
        assert!((result.fused - 2.0).abs() < 1e-12);
        assert_eq!(result.tier, MaturityTier::Undetermined);
        assert_eq!(result.tier.to_string(), "Non déterminé");
    }
}
