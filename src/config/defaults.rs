//! Default configurations and presets for soc-maturity.
//!
//! Provides named presets for common assessment setups.

use super::types::{AppConfig, FusionConfig, GovernanceConfig};
use crate::governance::UnknownValuePolicy;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default weights: 60% governance, 40% Purple Team
    Default,
    /// Equal weight for both assessments
    Balanced,
    /// Governance-heavy fusion (70/30)
    GovernanceFocused,
    /// Exercise-heavy fusion (40/60)
    ExerciseFocused,
    /// Default weights, unknown questionnaire labels score 0 instead of failing
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Balanced => "balanced",
            Self::GovernanceFocused => "governance-focused",
            Self::ExerciseFocused => "exercise-focused",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "balanced" | "even" => Some(Self::Balanced),
            "governance-focused" | "governance" => Some(Self::GovernanceFocused),
            "exercise-focused" | "exercise" | "purple" => Some(Self::ExerciseFocused),
            "lenient" | "permissive" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Governance 60%, Purple Team 40%; unknown labels are errors",
            Self::Balanced => "Governance and Purple Team weighted equally",
            Self::GovernanceFocused => "Governance 70%, Purple Team 30%",
            Self::ExerciseFocused => "Governance 40%, Purple Team 60%",
            Self::Lenient => "Default weights; unknown questionnaire labels score 0",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Default,
            Self::Balanced,
            Self::GovernanceFocused,
            Self::ExerciseFocused,
            Self::Lenient,
        ]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Balanced => Self::with_fusion(0.5, 0.5),
            ConfigPreset::GovernanceFocused => Self::with_fusion(0.7, 0.3),
            ConfigPreset::ExerciseFocused => Self::with_fusion(0.4, 0.6),
            ConfigPreset::Lenient => Self::lenient_preset(),
        }
    }

    fn with_fusion(governance_weight: f64, purple_weight: f64) -> Self {
        Self {
            fusion: FusionConfig {
                governance_weight,
                purple_weight,
            },
            ..Self::default()
        }
    }

    /// Lenient preset.
    ///
    /// - Default fusion weights
    /// - Unknown response and evidence labels are logged and scored 0
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            governance: GovernanceConfig {
                unknown_values: UnknownValuePolicy::Zero,
                ..GovernanceConfig::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("PURPLE"), Some(ConfigPreset::ExerciseFocused));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_all_presets_are_valid() {
        for preset in ConfigPreset::all() {
            let config = AppConfig::from_preset(*preset);
            assert!(config.is_valid(), "preset {preset} is invalid");
        }
    }

    #[test]
    fn test_preset_weights() {
        let config = AppConfig::from_preset(ConfigPreset::GovernanceFocused);
        assert_eq!(config.fusion.governance_weight, 0.7);
        assert_eq!(config.fusion.purple_weight, 0.3);

        let config = AppConfig::from_preset(ConfigPreset::Lenient);
        assert_eq!(config.governance.unknown_values, UnknownValuePolicy::Zero);
        assert_eq!(config.fusion, FusionConfig::default());
    }

    #[test]
    fn test_preset_descriptions_match_weights() {
        for preset in ConfigPreset::all() {
            assert!(!preset.description().is_empty(), "preset {preset}");
        }
        assert!(ConfigPreset::ExerciseFocused.description().contains("60%"));
    }
}
