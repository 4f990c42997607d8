//! Purple Team exercise metrics.
//!
//! Raw counts and durations collected during a joint red/blue exercise,
//! grouped by the pillar they feed. Counts are `f64` because exercise sheets
//! often carry averages across several runs.

use crate::error::{MaturityError, Result};
use serde::{Deserialize, Serialize};

/// Number of tactics in the MITRE ATT&CK enterprise matrix
pub const ATTACK_TACTICS: f64 = 14.0;

/// Coverage of the ATT&CK matrix by the exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageMetrics {
    /// MITRE techniques actually tested
    pub techniques_tested: f64,
    /// Techniques the exercise plan targeted
    pub techniques_targeted: f64,
    /// ATT&CK tactics covered, out of 14
    pub tactics_covered: f64,
}

/// Blue team detection of red team activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionMetrics {
    /// Red team actions that raised a detection
    pub events_detected: f64,
    /// Total red team actions performed
    pub red_team_actions: f64,
    pub true_positives: f64,
    pub false_positives: f64,
    /// Mean time to detect, in seconds
    pub mttd_secs: f64,
}

/// Blue team response to detected activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetrics {
    /// Mean time to respond, in seconds
    pub mttr_secs: f64,
    /// Red team actions that were never handled
    pub missed_actions: f64,
}

/// Red/blue collaboration around the exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CollaborationMetrics {
    pub scenarios_documented: f64,
    pub scenarios_executed: f64,
    pub recommendations_applied: f64,
    pub recommendations_proposed: f64,
}

/// All metrics of a Purple Team exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PurpleMetrics {
    pub coverage: CoverageMetrics,
    pub detection: DetectionMetrics,
    pub response: ResponseMetrics,
    pub collaboration: CollaborationMetrics,
}

impl PurpleMetrics {
    /// Every metric with its dotted name, in exercise sheet order
    #[must_use]
    pub fn fields(&self) -> [(&'static str, f64); 14] {
        [
            ("coverage.techniques_tested", self.coverage.techniques_tested),
            ("coverage.techniques_targeted", self.coverage.techniques_targeted),
            ("coverage.tactics_covered", self.coverage.tactics_covered),
            ("detection.events_detected", self.detection.events_detected),
            ("detection.red_team_actions", self.detection.red_team_actions),
            ("detection.true_positives", self.detection.true_positives),
            ("detection.false_positives", self.detection.false_positives),
            ("detection.mttd_secs", self.detection.mttd_secs),
            ("response.mttr_secs", self.response.mttr_secs),
            ("response.missed_actions", self.response.missed_actions),
            (
                "collaboration.scenarios_documented",
                self.collaboration.scenarios_documented,
            ),
            (
                "collaboration.scenarios_executed",
                self.collaboration.scenarios_executed,
            ),
            (
                "collaboration.recommendations_applied",
                self.collaboration.recommendations_applied,
            ),
            (
                "collaboration.recommendations_proposed",
                self.collaboration.recommendations_proposed,
            ),
        ]
    }

    /// Check the ranges the scoring formulas rely on.
    ///
    /// Every metric must be finite and non-negative, tactics covered must lie
    /// in [1, 14] and missed actions cannot exceed red team actions. Ratios
    /// such as techniques tested over targeted are not bounded here; the
    /// scorer clamps pillar scores instead.
    pub fn validate(&self) -> Result<()> {
        let mut problems: Vec<String> = self
            .fields()
            .iter()
            .filter(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, value)| format!("{name} must be a non-negative number, got {value}"))
            .collect();

        let tactics = self.coverage.tactics_covered;
        if tactics.is_finite() && !(1.0..=ATTACK_TACTICS).contains(&tactics) {
            problems.push(format!(
                "coverage.tactics_covered must be between 1 and {ATTACK_TACTICS}, got {tactics}"
            ));
        }

        if self.response.missed_actions > self.detection.red_team_actions {
            problems.push(format!(
                "response.missed_actions ({}) exceeds detection.red_team_actions ({})",
                self.response.missed_actions, self.detection.red_team_actions
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(MaturityError::validation(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PurpleMetrics {
        PurpleMetrics {
            coverage: CoverageMetrics {
                techniques_tested: 8.0,
                techniques_targeted: 10.0,
                tactics_covered: 7.0,
            },
            detection: DetectionMetrics {
                events_detected: 90.0,
                red_team_actions: 100.0,
                true_positives: 80.0,
                false_positives: 20.0,
                mttd_secs: 600.0,
            },
            response: ResponseMetrics {
                mttr_secs: 1200.0,
                missed_actions: 10.0,
            },
            collaboration: CollaborationMetrics {
                scenarios_documented: 9.0,
                scenarios_executed: 10.0,
                recommendations_applied: 6.0,
                recommendations_proposed: 8.0,
            },
        }
    }

    #[test]
    fn test_sample_is_valid() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        let mut m = sample();
        m.detection.false_positives = -1.0;
        m.response.mttr_secs = f64::NAN;
        let err = m.validate().unwrap_err().to_string();
        assert!(err.contains("detection.false_positives"), "{err}");
        assert!(err.contains("response.mttr_secs"), "{err}");
    }

    #[test]
    fn test_tactics_bounds() {
        let mut m = sample();
        m.coverage.tactics_covered = 15.0;
        assert!(m.validate().is_err());
        m.coverage.tactics_covered = 0.0;
        assert!(m.validate().is_err());
        m.coverage.tactics_covered = 14.0;
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_missed_actions_bounded_by_red_actions() {
        let mut m = sample();
        m.response.missed_actions = 101.0;
        let err = m.validate().unwrap_err().to_string();
        assert!(err.contains("exceeds"), "{err}");
    }

    #[test]
    fn test_metrics_from_yaml() {
        let yaml = r"
coverage: { techniques_tested: 8, techniques_targeted: 10, tactics_covered: 7 }
detection:
  events_detected: 90
  red_team_actions: 100
  true_positives: 80
  false_positives: 20
  mttd_secs: 600
response: { mttr_secs: 1200, missed_actions: 10 }
collaboration:
  scenarios_documented: 9
  scenarios_executed: 10
  recommendations_applied: 6
  recommendations_proposed: 8
";
        let m: PurpleMetrics = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(m, sample());
    }
}
