//! Governance scoring engine.
//!
//! Scores a response sheet against a weight table, aggregating question
//! scores into components, components into domains and domains into one
//! global score in [0, 1].

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::questionnaire::{ResponseSheet, WeightTable};
use super::scale::{question_score, EvidenceQuality, ResponseLevel};
use crate::error::{CategoryField, MaturityError, Result};
use crate::scoring::{grouped_weighted_mean, weighted_mean};

/// Weight given to domains without an explicit entry in the weight table
pub const DEFAULT_DOMAIN_WEIGHT: f64 = 1.0;

/// What to do with a response or evidence label that is not on its scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownValuePolicy {
    /// Fail the whole assessment with an `UnknownCategoryValue` error
    #[default]
    Reject,
    /// Score the label as 0 and log a warning
    Zero,
}

/// Score of a single component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub weight: f64,
    pub critical: bool,
    /// `None` when none of its questions were applicable and answered
    pub score: Option<f64>,
    /// Questions scored into this component
    pub answered: usize,
    /// Questions listed for this component in the weight table
    pub questions: usize,
}

/// Score of a single domain with its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub name: String,
    pub weight: f64,
    /// `None` when none of its components could be scored
    pub score: Option<f64>,
    pub components: Vec<ComponentScore>,
}

/// How the questions of the weight table were answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCounts {
    /// Scored questions
    pub answered: usize,
    /// Answered "not applicable", excluded from aggregation
    pub not_applicable: usize,
    /// No answer in the response sheet
    pub unanswered: usize,
}

/// Complete governance assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct GovernanceReport {
    /// Global governance score in [0, 1]
    pub score: f64,
    /// Who filled the questionnaire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub respondent: Option<String>,
    pub domains: Vec<DomainScore>,
    pub counts: AnswerCounts,
}

/// A question that made it into aggregation.
#[derive(Debug, Clone)]
struct ScoredQuestion {
    component: String,
    weight: f64,
    score: f64,
}

/// Governance scorer
#[derive(Debug, Clone)]
pub struct GovernanceScorer {
    unknown_values: UnknownValuePolicy,
    default_domain_weight: f64,
}

impl GovernanceScorer {
    /// Create a scorer that rejects unknown labels and weights domains evenly
    #[must_use]
    pub const fn new() -> Self {
        Self {
            unknown_values: UnknownValuePolicy::Reject,
            default_domain_weight: DEFAULT_DOMAIN_WEIGHT,
        }
    }

    /// Set the unknown label policy
    #[must_use]
    pub const fn with_unknown_values(mut self, policy: UnknownValuePolicy) -> Self {
        self.unknown_values = policy;
        self
    }

    /// Set the weight used for domains missing from the weight table
    #[must_use]
    pub const fn with_default_domain_weight(mut self, weight: f64) -> Self {
        self.default_domain_weight = weight;
        self
    }

    /// Score a response sheet.
    ///
    /// Fails on an invalid weight table, and on unknown labels under
    /// [`UnknownValuePolicy::Reject`].
    pub fn score(&self, table: &WeightTable, sheet: &ResponseSheet) -> Result<GovernanceReport> {
        table.validate()?;

        let (scored, counts) = self.score_questions(table, sheet)?;

        let component_scores = grouped_weighted_mean(
            scored.iter(),
            |q| q.component.clone(),
            |q| q.score,
            |q| q.weight,
        );
        let mut answered_per_component: IndexMap<&str, usize> = IndexMap::new();
        for q in &scored {
            *answered_per_component.entry(q.component.as_str()).or_default() += 1;
        }

        // Components without any applicable answer stay out of their domain
        let components = table.components();
        let domain_scores = grouped_weighted_mean(
            components
                .values()
                .filter_map(|c| component_scores.get(&c.name).map(|&s| (c, s))),
            |(c, _)| c.domain.clone(),
            |(_, s)| *s,
            |(c, _)| c.weight,
        );

        let domains: Vec<DomainScore> = table
            .domains()
            .into_iter()
            .map(|domain| DomainScore {
                weight: self.domain_weight(table, &domain),
                score: domain_scores.get(&domain).copied(),
                components: components
                    .values()
                    .filter(|c| c.domain == domain)
                    .map(|c| ComponentScore {
                        name: c.name.clone(),
                        weight: c.weight,
                        critical: c.critical,
                        score: component_scores.get(&c.name).copied(),
                        answered: answered_per_component
                            .get(c.name.as_str())
                            .copied()
                            .unwrap_or(0),
                        questions: c.question_count,
                    })
                    .collect(),
                name: domain,
            })
            .collect();

        let score = weighted_mean(
            domains
                .iter()
                .filter_map(|d| d.score.map(|s| (s, d.weight))),
        );

        tracing::info!(
            "Governance score {:.3} ({} answered, {} not applicable, {} unanswered)",
            score,
            counts.answered,
            counts.not_applicable,
            counts.unanswered
        );

        Ok(GovernanceReport {
            score,
            respondent: sheet.respondent.clone(),
            domains,
            counts,
        })
    }

    fn score_questions(
        &self,
        table: &WeightTable,
        sheet: &ResponseSheet,
    ) -> Result<(Vec<ScoredQuestion>, AnswerCounts)> {
        let mut counts = AnswerCounts::default();
        let mut scored = Vec::with_capacity(table.questions.len());

        for q in &table.questions {
            let Some(response) = sheet.answers.get(&q.code).and_then(|a| a.response_label())
            else {
                tracing::debug!("Question {} has no response, skipping", q.code);
                counts.unanswered += 1;
                continue;
            };

            let base = match ResponseLevel::parse(response) {
                Some(level) => match level.base_value() {
                    Some(base) => base,
                    None => {
                        counts.not_applicable += 1;
                        continue;
                    }
                },
                None => self.unknown(CategoryField::Response, response, &q.code)?,
            };

            let evidence = sheet.answers.get(&q.code).and_then(|a| a.evidence_label());
            let factor = match evidence {
                Some(label) => match EvidenceQuality::parse(label) {
                    Some(quality) => quality.factor(),
                    None => self.unknown(CategoryField::Evidence, label, &q.code)?,
                },
                None => {
                    tracing::debug!("Question {} has no evidence rating, counting none", q.code);
                    EvidenceQuality::NoEvidence.factor()
                }
            };

            counts.answered += 1;
            scored.push(ScoredQuestion {
                component: q.component.clone(),
                weight: q.question_weight,
                score: question_score(base, factor),
            });
        }

        let ignored = sheet
            .answers
            .keys()
            .filter(|code| !table.questions.iter().any(|q| &q.code == *code))
            .count();
        if ignored > 0 {
            tracing::debug!("Ignored {} answer(s) for codes missing from the weight table", ignored);
        }

        Ok((scored, counts))
    }

    fn unknown(&self, field: CategoryField, label: &str, question: &str) -> Result<f64> {
        match self.unknown_values {
            UnknownValuePolicy::Reject => Err(MaturityError::unknown_value(field, label, question)),
            UnknownValuePolicy::Zero => {
                tracing::warn!(
                    "Unknown {} value '{}' for question {}, scoring it as 0",
                    field,
                    label,
                    question
                );
                Ok(0.0)
            }
        }
    }

    fn domain_weight(&self, table: &WeightTable, domain: &str) -> f64 {
        table
            .domain_weights
            .get(domain)
            .copied()
            .unwrap_or(self.default_domain_weight)
    }
}

impl Default for GovernanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Global governance score of a response sheet with default scorer settings.
pub fn score_governance(table: &WeightTable, sheet: &ResponseSheet) -> Result<f64> {
    GovernanceScorer::new().score(table, sheet).map(|r| r.score)
}
