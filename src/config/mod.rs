//! Configuration module for soc-maturity.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use soc_maturity::config::{AppConfig, ConfigPreset, Validatable};
//!
//! // Use defaults
//! let config = AppConfig::default();
//! assert!(config.is_valid());
//!
//! // Use a preset
//! let config = AppConfig::from_preset(ConfigPreset::Balanced);
//! assert_eq!(config.fusion.purple_weight, 0.5);
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .fusion_weights(0.7, 0.3)
//!     .min_fused_score(Some(0.6))
//!     .build();
//! ```
//!
//! # Configuration File
//!
//! Place a `.soc-maturity.yaml` file in your project root or `~/.config/soc-maturity/`:
//!
//! ```yaml
//! fusion:
//!   governance_weight: 0.7
//!   purple_weight: 0.3
//! governance:
//!   unknown_values: zero
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, FusionConfig, GovernanceConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    config_search_paths, discover_config_file, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.soc-maturity.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        let properties = &value["properties"];
        for section in ["fusion", "governance", "output", "behavior"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
