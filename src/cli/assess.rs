//! Assess command handler.
//!
//! Implements the `assess` subcommand: governance, Purple Team and fusion in
//! one run.

use super::{acquire_metrics, GovernanceInputs, MetricsSource};
use crate::config::AppConfig;
use crate::fusion::fuse;
use crate::pipeline::{check_min_score, output_report};
use crate::purple::PurpleScorer;
use crate::reports::AssessmentReport;
use anyhow::Result;

/// Everything a full assessment reads
#[derive(Debug, Clone)]
pub struct AssessInputs {
    pub governance: GovernanceInputs,
    pub metrics: MetricsSource,
}

/// Build the complete report without writing it.
pub fn build_assessment(inputs: &AssessInputs, config: &AppConfig) -> Result<AssessmentReport> {
    let governance = inputs.governance.score(config)?;

    let metrics = acquire_metrics(&inputs.metrics)?;
    let purple = PurpleScorer::new().score(&metrics)?;

    let fusion = fuse(
        governance.score,
        purple.normalized_score(),
        config.fusion.weights(),
    );
    tracing::info!(
        "Assessment complete: governance {:.3}, purple {:.1}/100",
        governance.score,
        purple.score
    );

    Ok(AssessmentReport::new()
        .with_governance(governance)
        .with_purple(purple)
        .with_fusion(fusion))
}

/// Run the assess command, returning the desired exit code.
pub fn run_assess(inputs: &AssessInputs, config: &AppConfig) -> Result<i32> {
    let report = build_assessment(inputs, config)?;

    output_report(config, &report)?;
    Ok(check_min_score(&report, config.behavior.min_fused_score))
}
