//! Purple Team scoring engine.
//!
//! Each pillar score is the plain mean of its sub-scores on a 0-100 scale.
//! The global score is a fixed-weight sum of the four pillars.

use serde::{Deserialize, Serialize};

use super::metrics::{PurpleMetrics, ATTACK_TACTICS};
use crate::error::Result;
use crate::scoring::{band, ratio, Band};

/// Mean time to detect, in minutes, to detection sub-score
pub const MTTD_BANDS: &[Band<f64>] = &[
    (5.0, 100.0),
    (15.0, 80.0),
    (30.0, 60.0),
    (60.0, 40.0),
    (f64::INFINITY, 20.0),
];

/// Mean time to respond, in minutes, to response sub-score
pub const MTTR_BANDS: &[Band<f64>] = &[
    (10.0, 100.0),
    (30.0, 80.0),
    (60.0, 60.0),
    (f64::INFINITY, 40.0),
];

/// Global score to maturity level
pub const LEVEL_BANDS: &[Band<MaturityLevel>] = &[
    (21.0, MaturityLevel::Faible),
    (41.0, MaturityLevel::Emergent),
    (61.0, MaturityLevel::Structurant),
    (81.0, MaturityLevel::Stabilise),
    (91.0, MaturityLevel::Pilote),
    (f64::INFINITY, MaturityLevel::Optimise),
];

/// Weights of the four pillars in the global score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub coverage: f64,
    pub detection: f64,
    pub response: f64,
    pub collaboration: f64,
}

/// Fixed pillar weights; detection weighs most.
pub const PILLAR_WEIGHTS: PillarWeights = PillarWeights {
    coverage: 0.25,
    detection: 0.30,
    response: 0.25,
    collaboration: 0.20,
};

impl PillarWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.coverage + self.detection + self.response + self.collaboration
    }
}

/// Purple Team maturity level, 0 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaturityLevel {
    Faible,
    Emergent,
    Structurant,
    Stabilise,
    Pilote,
    Optimise,
}

impl MaturityLevel {
    /// Level for a global score in [0, 100]
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        band(score, LEVEL_BANDS).unwrap_or(Self::Faible)
    }

    /// Numeric level
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Faible => 0,
            Self::Emergent => 1,
            Self::Structurant => 2,
            Self::Stabilise => 3,
            Self::Pilote => 4,
            Self::Optimise => 5,
        }
    }

    /// Level name
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Faible => "Faible",
            Self::Emergent => "Émergent",
            Self::Structurant => "Structurant",
            Self::Stabilise => "Stabilisé",
            Self::Pilote => "Piloté",
            Self::Optimise => "Optimisé",
        }
    }

    /// Level name as shown in reports, e.g. `Niveau 5 – Optimisé (exemplarité SOC)`
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Optimise => format!("Niveau {} – {} (exemplarité SOC)", self.value(), self.label()),
            _ => format!("Niveau {} – {}", self.value(), self.label()),
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Scores of the four pillars, each in [0, 100].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PillarScores {
    pub coverage: f64,
    pub detection: f64,
    pub response: f64,
    pub collaboration: f64,
}

impl PillarScores {
    fn clamped(self) -> Self {
        Self {
            coverage: clamp_pillar(self.coverage),
            detection: clamp_pillar(self.detection),
            response: clamp_pillar(self.response),
            collaboration: clamp_pillar(self.collaboration),
        }
    }

    /// Weighted sum of the pillars
    #[must_use]
    pub fn weighted(&self, weights: &PillarWeights) -> f64 {
        self.coverage * weights.coverage
            + self.detection * weights.detection
            + self.response * weights.response
            + self.collaboration * weights.collaboration
    }
}

/// Complete Purple Team assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct PurpleReport {
    pub pillars: PillarScores,
    /// Global score in [0, 100]
    pub score: f64,
    pub level: MaturityLevel,
}

impl PurpleReport {
    /// Global score rescaled to [0, 1], as expected by fusion
    #[must_use]
    pub fn normalized_score(&self) -> f64 {
        self.score / 100.0
    }
}

/// Purple Team scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct PurpleScorer;

impl PurpleScorer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validate the metrics and score all pillars.
    pub fn score(&self, metrics: &PurpleMetrics) -> Result<PurpleReport> {
        metrics.validate()?;

        let raw = PillarScores {
            coverage: self.coverage(metrics),
            detection: self.detection(metrics),
            response: self.response(metrics),
            collaboration: self.collaboration(metrics),
        };
        let pillars = raw.clamped();
        if pillars != raw {
            tracing::warn!("Pillar scores clamped to [0, 100]: {:?} -> {:?}", raw, pillars);
        }

        let score = pillars.weighted(&PILLAR_WEIGHTS);
        let level = MaturityLevel::from_score(score);
        tracing::info!(
            "Purple Team score {:.2}/100 ({})",
            score,
            level.display_name()
        );

        Ok(PurpleReport {
            pillars,
            score,
            level,
        })
    }

    /// Coverage: techniques tested over targeted, and tactics over 14.
    #[must_use]
    pub fn coverage(&self, metrics: &PurpleMetrics) -> f64 {
        let c = &metrics.coverage;
        mean(&[
            100.0 * ratio(c.techniques_tested, c.techniques_targeted),
            100.0 * c.tactics_covered / ATTACK_TACTICS,
        ])
    }

    /// Detection: detection rate, precision and MTTD band.
    #[must_use]
    pub fn detection(&self, metrics: &PurpleMetrics) -> f64 {
        let d = &metrics.detection;
        mean(&[
            100.0 * ratio(d.events_detected, d.red_team_actions),
            100.0 * ratio(d.true_positives, d.true_positives + d.false_positives),
            band(d.mttd_secs / 60.0, MTTD_BANDS).unwrap_or(0.0),
        ])
    }

    /// Response: MTTR band and share of red team actions handled.
    ///
    /// Without any red team action the handled share scores 0.
    #[must_use]
    pub fn response(&self, metrics: &PurpleMetrics) -> f64 {
        let red = metrics.detection.red_team_actions;
        let handled = if red > 0.0 {
            100.0 * (1.0 - metrics.response.missed_actions / red)
        } else {
            tracing::debug!("No red team actions, missed-action score resolves to 0");
            0.0
        };
        mean(&[
            band(metrics.response.mttr_secs / 60.0, MTTR_BANDS).unwrap_or(0.0),
            handled,
        ])
    }

    /// Collaboration: scenario documentation and recommendation follow-up.
    #[must_use]
    pub fn collaboration(&self, metrics: &PurpleMetrics) -> f64 {
        let c = &metrics.collaboration;
        mean(&[
            100.0 * ratio(c.scenarios_documented, c.scenarios_executed),
            100.0 * ratio(c.recommendations_applied, c.recommendations_proposed),
        ])
    }
}

/// Score Purple Team metrics with the default scorer
pub fn score_purple(metrics: &PurpleMetrics) -> Result<PurpleReport> {
    PurpleScorer::new().score(metrics)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn clamp_pillar(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
