//! Governance command handler.
//!
//! Implements the `governance` subcommand: score a questionnaire response
//! sheet against a weight table.

use crate::config::AppConfig;
use crate::governance::GovernanceReport;
use crate::input::{load_response_sheet, load_weight_table};
use crate::pipeline::{check_min_score, output_report};
use crate::reports::AssessmentReport;
use anyhow::Result;
use std::path::PathBuf;

/// Questionnaire files for a governance assessment
#[derive(Debug, Clone)]
pub struct GovernanceInputs {
    pub weights: PathBuf,
    pub responses: PathBuf,
}

impl GovernanceInputs {
    /// Load both files and score them with the configured scorer.
    pub fn score(&self, config: &AppConfig) -> Result<GovernanceReport> {
        let table = load_weight_table(&self.weights)?;
        let sheet = load_response_sheet(&self.responses)?;
        let report = config.governance.scorer().score(&table, &sheet)?;
        Ok(report)
    }
}

/// Run the governance command, returning the desired exit code.
pub fn run_governance(inputs: &GovernanceInputs, config: &AppConfig) -> Result<i32> {
    let governance = inputs.score(config)?;
    let report = AssessmentReport::new().with_governance(governance);

    output_report(config, &report)?;
    Ok(check_min_score(&report, config.behavior.min_fused_score))
}
