//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler loads its inputs, scores them, writes the report and returns
//! the process exit code.

mod assess;
mod fuse;
mod governance;
mod purple;

pub use assess::{build_assessment, run_assess, AssessInputs};
pub use fuse::{run_fuse, PurpleScoreInput};
pub use governance::{run_governance, GovernanceInputs};
pub use purple::{acquire_metrics, run_purple, MetricsSource};

use crate::config::{AppConfig, Validatable};
use crate::error::MaturityError;

/// Reject a configuration that fails validation, listing every problem.
pub fn ensure_valid_config(config: &AppConfig) -> Result<(), MaturityError> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(MaturityError::config(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_lists_all_errors() {
        let config = AppConfig::builder()
            .fusion_weights(0.9, 0.9)
            .min_fused_score(Some(2.0))
            .build();
        let message = ensure_valid_config(&config).unwrap_err().to_string();
        assert!(message.contains("fusion"));
        assert!(message.contains("behavior.min_fused_score"));
    }

    #[test]
    fn test_default_config_passes() {
        assert!(ensure_valid_config(&AppConfig::default()).is_ok());
    }
}
