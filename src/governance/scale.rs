//! Questionnaire answer scales.
//!
//! Labels are matched case-insensitively, with en/em dashes treated as plain
//! hyphens and runs of whitespace collapsed, so spreadsheet exports and
//! hand-written YAML both resolve.

use serde::{Deserialize, Serialize};

/// Share of a question's base value that is earned without any evidence.
pub const EVIDENCE_FLOOR: f64 = 0.7;

/// Share of a question's base value that depends on evidence quality.
pub const EVIDENCE_SPAN: f64 = 0.3;

/// How far a practice is in place, as answered by the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseLevel {
    /// 1 – Pas du tout présent
    NotPresent,
    /// 2 – Partiellement présent
    Partial,
    /// 3 – Moyennement présent
    Moderate,
    /// 4 – Presque entièrement présent
    MostlyPresent,
    /// 5 – Totalement mis en place
    Implemented,
    /// N/A – Non applicable à notre organisation
    NotApplicable,
}

impl ResponseLevel {
    const ALL: [Self; 6] = [
        Self::NotPresent,
        Self::Partial,
        Self::Moderate,
        Self::MostlyPresent,
        Self::Implemented,
        Self::NotApplicable,
    ];

    /// Questionnaire wording of the level
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NotPresent => "1 – Pas du tout présent",
            Self::Partial => "2 – Partiellement présent",
            Self::Moderate => "3 – Moyennement présent",
            Self::MostlyPresent => "4 – Presque entièrement présent",
            Self::Implemented => "5 – Totalement mis en place",
            Self::NotApplicable => "N/A – Non applicable à notre organisation",
        }
    }

    /// Base value of the answer, `None` when the question does not apply
    #[must_use]
    pub const fn base_value(&self) -> Option<f64> {
        match self {
            Self::NotPresent => Some(0.0),
            Self::Partial => Some(0.25),
            Self::Moderate => Some(0.5),
            Self::MostlyPresent => Some(0.75),
            Self::Implemented => Some(1.0),
            Self::NotApplicable => None,
        }
    }

    /// Resolve a response label, `None` when it is not on the scale
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        match normalized.as_str() {
            "1" => return Some(Self::NotPresent),
            "2" => return Some(Self::Partial),
            "3" => return Some(Self::Moderate),
            "4" => return Some(Self::MostlyPresent),
            "5" => return Some(Self::Implemented),
            "n/a" | "na" | "not applicable" | "non applicable" => {
                return Some(Self::NotApplicable)
            }
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|level| normalize_label(level.label()) == normalized)
    }
}

/// Quality of the evidence backing an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvidenceQuality {
    /// Aucune preuve
    NoEvidence,
    /// Preuve faible ou partielle
    Weak,
    /// Preuve adéquate
    Adequate,
    /// Preuve solide et vérifiable
    Strong,
}

impl EvidenceQuality {
    const ALL: [Self; 4] = [Self::NoEvidence, Self::Weak, Self::Adequate, Self::Strong];

    /// Questionnaire wording of the rating
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NoEvidence => "Aucune preuve",
            Self::Weak => "Preuve faible ou partielle",
            Self::Adequate => "Preuve adéquate",
            Self::Strong => "Preuve solide et vérifiable",
        }
    }

    /// Evidence factor in [0, 1]
    #[must_use]
    pub const fn factor(&self) -> f64 {
        match self {
            Self::NoEvidence => 0.0,
            Self::Weak => 0.33,
            Self::Adequate => 0.67,
            Self::Strong => 1.0,
        }
    }

    /// Resolve an evidence label, `None` when it is not on the scale
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        match normalized.as_str() {
            "0" | "none" => return Some(Self::NoEvidence),
            "1" | "weak" => return Some(Self::Weak),
            "2" | "adequate" => return Some(Self::Adequate),
            "3" | "strong" => return Some(Self::Strong),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|quality| normalize_label(quality.label()) == normalized)
    }
}

/// Score of a single answered question.
///
/// The base value is kept at 70% without evidence and reaches 100% with solid
/// evidence.
#[must_use]
pub fn question_score(base: f64, evidence_factor: f64) -> f64 {
    base * (EVIDENCE_FLOOR + EVIDENCE_SPAN * evidence_factor)
}

fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace(['–', '—'], "-")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_canonical_labels() {
        for level in ResponseLevel::ALL {
            assert_eq!(ResponseLevel::parse(level.label()), Some(level));
        }
    }

    #[test]
    fn test_response_label_variants() {
        assert_eq!(
            ResponseLevel::parse("5 - totalement  mis en place"),
            Some(ResponseLevel::Implemented)
        );
        assert_eq!(ResponseLevel::parse(" 3 "), Some(ResponseLevel::Moderate));
        assert_eq!(ResponseLevel::parse("N/A"), Some(ResponseLevel::NotApplicable));
        assert_eq!(ResponseLevel::parse("6"), None);
        assert_eq!(ResponseLevel::parse("Totalement"), None);
    }

    #[test]
    fn test_response_base_values() {
        assert_eq!(ResponseLevel::NotPresent.base_value(), Some(0.0));
        assert_eq!(ResponseLevel::MostlyPresent.base_value(), Some(0.75));
        assert_eq!(ResponseLevel::NotApplicable.base_value(), None);
    }

    #[test]
    fn test_evidence_labels() {
        for quality in EvidenceQuality::ALL {
            assert_eq!(EvidenceQuality::parse(quality.label()), Some(quality));
        }
        assert_eq!(
            EvidenceQuality::parse("PREUVE ADÉQUATE"),
            Some(EvidenceQuality::Adequate)
        );
        assert_eq!(EvidenceQuality::parse("strong"), Some(EvidenceQuality::Strong));
        assert_eq!(EvidenceQuality::parse("Preuve orale"), None);
    }

    #[test]
    fn test_question_score_bounds() {
        assert!((question_score(1.0, 1.0) - 1.0).abs() < 1e-12);
        assert!((question_score(1.0, 0.0) - 0.7).abs() < 1e-12);
        assert!((question_score(0.5, 0.67) - 0.5 * 0.901).abs() < 1e-12);
        assert_eq!(question_score(0.0, 1.0), 0.0);
    }
}
