//! Report data types.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::fusion::FusionResult;
use crate::governance::GovernanceReport;
use crate::purple::PurpleReport;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned console summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Who filled the questionnaire, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            respondent: None,
        }
    }
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything an assessment run produced.
///
/// Each section is present only when the corresponding assessment ran: a
/// `fuse` run from precomputed scores has a fusion section alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub metadata: ReportMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub governance: Option<GovernanceReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purple: Option<PurpleReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fusion: Option<FusionResult>,
}

impl AssessmentReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a governance assessment; its respondent becomes the report's.
    #[must_use]
    pub fn with_governance(mut self, governance: GovernanceReport) -> Self {
        if self.metadata.respondent.is_none() {
            self.metadata.respondent.clone_from(&governance.respondent);
        }
        self.governance = Some(governance);
        self
    }

    #[must_use]
    pub fn with_purple(mut self, purple: PurpleReport) -> Self {
        self.purple = Some(purple);
        self
    }

    #[must_use]
    pub fn with_fusion(mut self, fusion: FusionResult) -> Self {
        self.fusion = Some(fusion);
        self
    }

    /// The score CI gates compare against: the fused index when present,
    /// otherwise the governance score, otherwise the normalized Purple Team
    /// score.
    #[must_use]
    pub fn headline_score(&self) -> Option<f64> {
        self.fusion
            .as_ref()
            .map(|f| f.fused)
            .or_else(|| self.governance.as_ref().map(|g| g.score))
            .or_else(|| self.purple.as_ref().map(PurpleReport::normalized_score))
    }
}
