//! Questionnaire weight table and response sheet.
//!
//! The weight table mirrors the assessment spreadsheet: one row per question,
//! each row repeating its component and domain. Column names of the original
//! French sheet are accepted as aliases.

use crate::error::{MaturityError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Accepted range for a question weight
pub const QUESTION_WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 1.0..=1.2;

/// Accepted range for a component weight
pub const COMPONENT_WEIGHT_RANGE: std::ops::RangeInclusive<f64> = 1.0..=1.3;

const fn unit_weight() -> f64 {
    1.0
}

/// One row of the weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// Question code, e.g. `PER-01`
    #[serde(alias = "Code Question")]
    pub code: String,
    /// Component the question belongs to
    #[serde(alias = "Composant")]
    pub component: String,
    /// Domain the component belongs to
    #[serde(alias = "Domaine")]
    pub domain: String,
    /// Question weight (1.0–1.2)
    #[serde(default = "unit_weight", alias = "Pondération question (1.0–1.2)")]
    pub question_weight: f64,
    /// Weight of the question's component (1.0–1.3)
    #[serde(default = "unit_weight", alias = "Pondération composant (1.0–1.3)")]
    pub component_weight: f64,
    /// Whether the component is flagged critical. Carried through to reports,
    /// not used in scoring.
    #[serde(
        default,
        alias = "Criticité du composant",
        deserialize_with = "deserialize_flag"
    )]
    pub critical: bool,
}

/// Component metadata collected from the weight table rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSpec {
    pub name: String,
    pub domain: String,
    pub weight: f64,
    pub critical: bool,
    pub question_count: usize,
}

/// Question, component and domain weights for a questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    /// One entry per question
    pub questions: Vec<QuestionSpec>,
    /// Explicit domain weights; domains not listed use the scorer default
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub domain_weights: IndexMap<String, f64>,
}

impl WeightTable {
    /// Components in the order they first appear, with their metadata taken
    /// from the first row that mentions them.
    #[must_use]
    pub fn components(&self) -> IndexMap<String, ComponentSpec> {
        let mut components: IndexMap<String, ComponentSpec> = IndexMap::new();
        for q in &self.questions {
            components
                .entry(q.component.clone())
                .and_modify(|c| c.question_count += 1)
                .or_insert_with(|| ComponentSpec {
                    name: q.component.clone(),
                    domain: q.domain.clone(),
                    weight: q.component_weight,
                    critical: q.critical,
                    question_count: 1,
                });
        }
        components
    }

    /// Domains in the order they first appear.
    #[must_use]
    pub fn domains(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .filter(|q| seen.insert(q.domain.as_str()))
            .map(|q| q.domain.clone())
            .collect()
    }

    /// Check weights and row consistency.
    ///
    /// All problems are reported together in one validation error.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        if self.questions.is_empty() {
            problems.push("weight table has no questions".to_string());
        }

        let mut codes = HashSet::new();
        let mut components: IndexMap<&str, &QuestionSpec> = IndexMap::new();
        for q in &self.questions {
            if q.code.trim().is_empty() {
                problems.push(format!("question in component '{}' has an empty code", q.component));
            } else if !codes.insert(q.code.as_str()) {
                problems.push(format!("duplicate question code '{}'", q.code));
            }

            if !QUESTION_WEIGHT_RANGE.contains(&q.question_weight) {
                problems.push(format!(
                    "question '{}': question weight {} outside {:?}",
                    q.code, q.question_weight, QUESTION_WEIGHT_RANGE
                ));
            }
            if !COMPONENT_WEIGHT_RANGE.contains(&q.component_weight) {
                problems.push(format!(
                    "question '{}': component weight {} outside {:?}",
                    q.code, q.component_weight, COMPONENT_WEIGHT_RANGE
                ));
            }

            if let Some(first) = components.get(q.component.as_str()).copied() {
                if first.domain != q.domain {
                    problems.push(format!(
                        "component '{}' listed under domains '{}' and '{}'",
                        q.component, first.domain, q.domain
                    ));
                }
                if first.component_weight != q.component_weight {
                    problems.push(format!(
                        "component '{}' has conflicting weights {} and {}",
                        q.component, first.component_weight, q.component_weight
                    ));
                }
                if first.critical != q.critical {
                    problems.push(format!(
                        "component '{}' has conflicting criticality flags",
                        q.component
                    ));
                }
            } else {
                components.insert(q.component.as_str(), q);
            }
        }

        for (domain, weight) in &self.domain_weights {
            if !weight.is_finite() || *weight < 0.0 {
                problems.push(format!(
                    "domain '{domain}': weight {weight} must be a non-negative number"
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(MaturityError::validation(problems.join("; ")))
        }
    }
}

/// One respondent's answer to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Response label; missing or blank means the question was skipped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    /// Evidence label; missing or blank counts as no evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl Answer {
    /// Build an answer from a response and evidence label
    pub fn new(response: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
            evidence: Some(evidence.into()),
        }
    }

    /// Response label, trimmed, if one was given
    #[must_use]
    pub fn response_label(&self) -> Option<&str> {
        non_blank(self.response.as_deref())
    }

    /// Evidence label, trimmed, if one was given
    #[must_use]
    pub fn evidence_label(&self) -> Option<&str> {
        non_blank(self.evidence.as_deref())
    }
}

/// Answers of a single questionnaire submission, keyed by question code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSheet {
    /// Who filled the questionnaire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    /// Answers keyed by question code
    #[serde(default)]
    pub answers: IndexMap<String, Answer>,
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Accept `true`/`false` as well as the spreadsheet's `Oui`/`Non`.
fn deserialize_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => matches!(
            s.trim().to_lowercase().as_str(),
            "oui" | "yes" | "true" | "y" | "o" | "1"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, component: &str, domain: &str) -> QuestionSpec {
        QuestionSpec {
            code: code.to_string(),
            component: component.to_string(),
            domain: domain.to_string(),
            question_weight: 1.0,
            component_weight: 1.0,
            critical: false,
        }
    }

    #[test]
    fn test_components_and_domains_in_table_order() {
        let table = WeightTable {
            questions: vec![
                row("T1", "Outillage", "Technologie"),
                row("P1", "Formation", "Personnel"),
                row("T2", "Outillage", "Technologie"),
            ],
            domain_weights: IndexMap::new(),
        };

        let components = table.components();
        assert_eq!(components.len(), 2);
        assert_eq!(components["Outillage"].question_count, 2);
        assert_eq!(components.get_index(1).map(|(k, _)| k.as_str()), Some("Formation"));
        assert_eq!(table.domains(), vec!["Technologie", "Personnel"]);
    }

    #[test]
    fn test_validate_accepts_consistent_table() {
        let mut q = row("P1", "Formation", "Personnel");
        q.question_weight = 1.2;
        q.component_weight = 1.3;
        let table = WeightTable {
            questions: vec![q],
            domain_weights: IndexMap::new(),
        };
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut heavy = row("P1", "Formation", "Personnel");
        heavy.question_weight = 2.0;
        let mut moved = row("P2", "Formation", "Processus");
        moved.component_weight = 1.1;
        let dup = row("P2", "Formation", "Personnel");

        let table = WeightTable {
            questions: vec![heavy, moved, dup],
            domain_weights: IndexMap::from([("Personnel".to_string(), -1.0)]),
        };

        let err = table.validate().unwrap_err().to_string();
        assert!(err.contains("question weight 2"), "{err}");
        assert!(err.contains("duplicate question code 'P2'"), "{err}");
        assert!(err.contains("domains 'Personnel' and 'Processus'"), "{err}");
        assert!(err.contains("conflicting weights"), "{err}");
        assert!(err.contains("domain 'Personnel'"), "{err}");
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        assert!(WeightTable::default().validate().is_err());
    }

    #[test]
    fn test_spreadsheet_column_aliases() {
        let yaml = r#"
questions:
  - "Code Question": GOV-1
    "Composant": Pilotage
    "Domaine": Processus
    "Pondération question (1.0–1.2)": 1.1
    "Pondération composant (1.0–1.3)": 1.2
    "Criticité du composant": Oui
"#;
        let table: WeightTable = serde_yaml::from_str(yaml).unwrap();
        let q = &table.questions[0];
        assert_eq!(q.code, "GOV-1");
        assert_eq!(q.domain, "Processus");
        assert!((q.question_weight - 1.1).abs() < 1e-12);
        assert!(q.critical);
    }

    #[test]
    fn test_answer_blank_labels_are_missing() {
        let answer = Answer {
            response: Some("   ".to_string()),
            evidence: None,
        };
        assert_eq!(answer.response_label(), None);
        assert_eq!(answer.evidence_label(), None);

        let answer = Answer::new(" 4 ", "weak");
        assert_eq!(answer.response_label(), Some("4"));
    }
}
