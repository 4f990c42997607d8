//! SOC governance maturity scoring.
//!
//! A questionnaire answer combines a response level (how far a practice is in
//! place) with an evidence rating. Question scores are aggregated with
//! question weights into components, with component weights into domains, and
//! with domain weights into one global score in [0, 1].
//!
//! # Usage
//!
//! ```
//! use soc_maturity::governance::{Answer, GovernanceScorer, QuestionSpec, ResponseSheet, WeightTable};
//!
//! let table = WeightTable {
//!     questions: vec![QuestionSpec {
//!         code: "PER-01".into(),
//!         component: "Formation".into(),
//!         domain: "Personnel".into(),
//!         question_weight: 1.0,
//!         component_weight: 1.0,
//!         critical: false,
//!     }],
//!     ..Default::default()
//! };
//! let mut sheet = ResponseSheet::default();
//! sheet.answers.insert("PER-01".into(), Answer::new("5", "Preuve solide et vérifiable"));
//!
//! let report = GovernanceScorer::new().score(&table, &sheet).unwrap();
//! assert!((report.score - 1.0).abs() < 1e-12);
//! ```

mod questionnaire;
mod scale;
mod scorer;

pub use questionnaire::{
    Answer, ComponentSpec, QuestionSpec, ResponseSheet, WeightTable, COMPONENT_WEIGHT_RANGE,
    QUESTION_WEIGHT_RANGE,
};
pub use scale::{question_score, EvidenceQuality, ResponseLevel, EVIDENCE_FLOOR, EVIDENCE_SPAN};
pub use scorer::{
    score_governance, AnswerCounts, ComponentScore, DomainScore, GovernanceReport,
    GovernanceScorer, UnknownValuePolicy, DEFAULT_DOMAIN_WEIGHT,
};
