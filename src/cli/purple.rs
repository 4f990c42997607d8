//! Purple Team command handler.
//!
//! Implements the `purple` subcommand: score exercise metrics read from a
//! file or asked interactively.

use crate::config::AppConfig;
use crate::input::{load_purple_metrics, prompt_purple_metrics, Prompter};
use crate::pipeline::{check_min_score, output_report};
use crate::purple::{PurpleMetrics, PurpleScorer};
use crate::reports::AssessmentReport;
use anyhow::Result;
use std::path::PathBuf;

/// Where exercise metrics come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsSource {
    /// YAML or JSON metrics document
    File(PathBuf),
    /// Ask on the terminal
    Interactive,
}

/// Read or ask for the exercise metrics.
pub fn acquire_metrics(source: &MetricsSource) -> Result<PurpleMetrics> {
    let metrics = match source {
        MetricsSource::File(path) => load_purple_metrics(path)?,
        MetricsSource::Interactive => prompt_purple_metrics(&mut Prompter::stdio())?,
    };
    Ok(metrics)
}

/// Run the purple command, returning the desired exit code.
pub fn run_purple(source: &MetricsSource, config: &AppConfig) -> Result<i32> {
    let metrics = acquire_metrics(source)?;
    let purple = PurpleScorer::new().score(&metrics)?;
    let report = AssessmentReport::new().with_purple(purple);

    output_report(config, &report)?;
    Ok(check_min_score(&report, config.behavior.min_fused_score))
}
