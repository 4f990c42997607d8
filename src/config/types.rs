//! Configuration types for soc-maturity.
//!
//! Provides structured configuration for scoring, fusion and output.

use crate::fusion::FusionWeights;
use crate::governance::{GovernanceScorer, UnknownValuePolicy, DEFAULT_DOMAIN_WEIGHT};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Fusion weights for the combined maturity index
    pub fusion: FusionConfig,
    /// Governance questionnaire scoring
    pub governance: GovernanceConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the fusion weights (α for governance, β for Purple Team).
    pub const fn fusion_weights(mut self, governance: f64, purple: f64) -> Self {
        self.config.fusion.governance_weight = governance;
        self.config.fusion.purple_weight = purple;
        self
    }

    /// Set how unknown questionnaire labels are handled.
    pub const fn unknown_values(mut self, policy: UnknownValuePolicy) -> Self {
        self.config.governance.unknown_values = policy;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Fail the run when the headline score is below this value.
    pub const fn min_fused_score(mut self, score: Option<f64>) -> Self {
        self.config.behavior.min_fused_score = score;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section types
// ============================================================================

/// Weights of the governance and Purple Team scores in the fused index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FusionConfig {
    /// Weight of the governance score (α), 0.0-1.0
    #[schemars(range(min = 0.0, max = 1.0))]
    pub governance_weight: f64,
    /// Weight of the Purple Team score (β), 0.0-1.0
    #[schemars(range(min = 0.0, max = 1.0))]
    pub purple_weight: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        let weights = FusionWeights::default();
        Self {
            governance_weight: weights.governance,
            purple_weight: weights.purple,
        }
    }
}

impl FusionConfig {
    /// Weights to pass to fusion.
    #[must_use]
    pub const fn weights(&self) -> FusionWeights {
        FusionWeights::new(self.governance_weight, self.purple_weight)
    }
}

/// Governance questionnaire scoring options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GovernanceConfig {
    /// What to do with response or evidence labels outside the scale
    pub unknown_values: UnknownValuePolicy,
    /// Weight of domains the weight table does not list
    #[schemars(range(min = 0.0))]
    pub default_domain_weight: f64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        Self {
            unknown_values: UnknownValuePolicy::default(),
            default_domain_weight: DEFAULT_DOMAIN_WEIGHT,
        }
    }
}

impl GovernanceConfig {
    /// Scorer configured from these options.
    #[must_use]
    pub const fn scorer(&self) -> GovernanceScorer {
        GovernanceScorer::new()
            .with_unknown_values(self.unknown_values)
            .with_default_domain_weight(self.default_domain_weight)
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Exit with code 1 when the headline score is below this value (0.0-1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0.0, max = 1.0))]
    pub min_fused_score: Option<f64>,
}
