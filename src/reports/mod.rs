//! Report generation for assessment results.
//!
//! This module provides the output formats for an [`AssessmentReport`]:
//! - Summary: Aligned console output, optionally colored
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//!
//! # Security
//!
//! Domain, component and respondent names come from user-supplied files and
//! are escaped through the [`escape`] module before being embedded in
//! Markdown.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{AssessmentReport, ReportFormat, ReportMetadata};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render an assessment report
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &AssessmentReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Score in [0, 1] as a percentage, e.g. `79.2%`
pub(crate) fn percent(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Score in [0, 100] out of 100, e.g. `75.0/100`
pub(crate) fn out_of_100(score: f64) -> String {
    format!("{score:.1}/100")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_write_report_to_buffer() {
        let reporter = create_reporter_with_options(ReportFormat::Json, false);
        let mut buf = Vec::new();
        reporter
            .write_report(&AssessmentReport::new(), &mut buf)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("tool_version"));
    }

    #[test]
    fn test_score_formatting() {
        assert_eq!(percent(0.792), "79.2%");
        assert_eq!(percent(1.0), "100.0%");
        assert_eq!(out_of_100(83.333), "83.3/100");
    }
}
