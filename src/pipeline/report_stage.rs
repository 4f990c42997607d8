//! Report output stage.
//!
//! Renders an assessment report in the configured format, writes it out and
//! applies the minimum score gate.

use crate::config::AppConfig;
use crate::reports::{create_reporter_with_options, AssessmentReport};
use anyhow::Result;

use super::{exit_codes, should_use_color, write_output, OutputTarget};

/// Render `report` with the configured format and write it to the configured target.
pub fn output_report(config: &AppConfig, report: &AssessmentReport) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let use_color = should_use_color(config.output.no_color, &target);
    let reporter = create_reporter_with_options(config.output.format, use_color);

    tracing::debug!("Rendering {} report", reporter.format());
    let rendered = reporter.generate(report)?;

    write_output(&rendered, &target, config.behavior.quiet)
}

/// Exit code for the headline score against an optional threshold.
///
/// A report with no score at all fails a configured gate.
#[must_use]
pub fn check_min_score(report: &AssessmentReport, min_score: Option<f64>) -> i32 {
    let Some(threshold) = min_score else {
        return exit_codes::SUCCESS;
    };

    match report.headline_score() {
        Some(score) if score >= threshold => exit_codes::SUCCESS,
        Some(score) => {
            tracing::error!(
                "Maturity score {:.3} is below minimum threshold {:.3}",
                score,
                threshold
            );
            exit_codes::BELOW_THRESHOLD
        }
        None => {
            tracing::error!("No score available to compare against threshold {threshold:.3}");
            exit_codes::BELOW_THRESHOLD
        }
    }
}
