//! Pipeline orchestration for maturity assessments.
//!
//! This module provides the shared load → score → report plumbing used by
//! the CLI command handlers.

mod output;
mod report_stage;

pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{check_min_score, output_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// The headline score is below the `--min-score` threshold
    pub const BELOW_THRESHOLD: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_THRESHOLD, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
