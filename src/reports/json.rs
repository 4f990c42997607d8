//! JSON report generator.

use super::{AssessmentReport, ReportError, ReportFormat, ReportGenerator};

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &AssessmentReport) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fusion::{fuse, FusionWeights};

    #[test]
    fn test_json_round_trips_report() {
        let report =
            AssessmentReport::new().with_fusion(fuse(0.82, 0.75, FusionWeights::default()));
        let json = JsonReporter::new().generate(&report).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fusion"]["tier"], "pilote");
        assert!(value.get("governance").is_none());

        let back: AssessmentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.metadata, report.metadata);
        let (back, fused) = (back.fusion.unwrap(), report.fusion.unwrap());
        assert_eq!(back.tier, fused.tier);
        assert!((back.fused - fused.fused).abs() < 1e-12);
    }

    #[test]
    fn test_compact_output() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate(&AssessmentReport::new())
            .unwrap();
        assert!(!json.contains('\n'));
    }
}
