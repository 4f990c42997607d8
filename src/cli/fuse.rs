//! Fuse command handler.
//!
//! Implements the `fuse` subcommand: combine an already computed governance
//! score with a Purple Team score.

use crate::config::AppConfig;
use crate::error::MaturityError;
use crate::fusion::fuse;
use crate::input::{prompt_purple_score, Prompter};
use crate::pipeline::{check_min_score, output_report};
use crate::reports::AssessmentReport;
use anyhow::Result;

/// How the Purple Team score is supplied
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PurpleScoreInput {
    /// Normalized score in [0, 1]
    Normalized(f64),
    /// Global exercise score in [0, 100]
    OutOf100(f64),
    /// Ask on the terminal
    Interactive,
}

impl PurpleScoreInput {
    /// Resolve to a normalized score, prompting if needed.
    pub fn resolve(self) -> Result<f64> {
        let score = match self {
            Self::Normalized(score) => unit_score("purple", score)?,
            Self::OutOf100(score) => {
                if !(0.0..=100.0).contains(&score) {
                    return Err(MaturityError::validation(format!(
                        "purple score must be between 0 and 100, got {score}"
                    ))
                    .into());
                }
                score / 100.0
            }
            Self::Interactive => prompt_purple_score(&mut Prompter::stdio())?,
        };
        Ok(score)
    }
}

fn unit_score(name: &str, score: f64) -> Result<f64, MaturityError> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(MaturityError::validation(format!(
            "{name} score must be between 0 and 1, got {score}"
        )))
    }
}

/// Run the fuse command, returning the desired exit code.
pub fn run_fuse(governance: f64, purple: PurpleScoreInput, config: &AppConfig) -> Result<i32> {
    let governance = unit_score("governance", governance)?;
    let purple = purple.resolve()?;

    let fusion = fuse(governance, purple, config.fusion.weights());
    let report = AssessmentReport::new().with_fusion(fusion);

    output_report(config, &report)?;
    Ok(check_min_score(&report, config.behavior.min_fused_score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_100_is_normalized() {
        assert!((PurpleScoreInput::OutOf100(75.0).resolve().unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        assert!(PurpleScoreInput::Normalized(1.2).resolve().is_err());
        assert!(PurpleScoreInput::OutOf100(-1.0).resolve().is_err());
        assert!(PurpleScoreInput::Normalized(f64::NAN).resolve().is_err());
    }

    #[test]
    fn test_governance_score_checked() {
        let err = run_fuse(1.5, PurpleScoreInput::Normalized(0.5), &AppConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("governance score"));
    }
}
