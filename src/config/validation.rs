//! Configuration validation for soc-maturity.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AppConfig, BehaviorConfig, FusionConfig, GovernanceConfig, OutputConfig};

/// Tolerance on the fusion weight sum
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.fusion.validate());
        errors.extend(self.governance.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

fn check_unit_interval(field: &str, value: f64, errors: &mut Vec<ConfigError>) {
    if !(0.0..=1.0).contains(&value) {
        errors.push(ConfigError::new(
            field,
            format!("must be between 0.0 and 1.0, got {value}"),
        ));
    }
}

impl Validatable for FusionConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        check_unit_interval("fusion.governance_weight", self.governance_weight, &mut errors);
        check_unit_interval("fusion.purple_weight", self.purple_weight, &mut errors);

        let total = self.governance_weight + self.purple_weight;
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            errors.push(ConfigError::new(
                "fusion",
                format!("governance_weight + purple_weight must equal 1.0, got {total}"),
            ));
        }
        errors
    }
}

impl Validatable for GovernanceConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(self.default_domain_weight.is_finite() && self.default_domain_weight > 0.0) {
            errors.push(ConfigError::new(
                "governance.default_domain_weight",
                format!("must be a positive number, got {}", self.default_domain_weight),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(score) = self.min_fused_score {
            check_unit_interval("behavior.min_fused_score", score, &mut errors);
        }
        errors
    }
}
