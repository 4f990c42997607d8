//! **SOC maturity scoring: governance questionnaires, Purple Team exercises, and their fusion.**
//!
//! `soc-maturity` turns two independent views of a Security Operations
//! Center into comparable maturity figures:
//!
//! - **Governance**: a weighted self-assessment questionnaire. Each answer
//!   combines a response level (1 to 5, or not applicable) with the quality
//!   of the supporting evidence, and scores roll up through components and
//!   domains into a global score in [0, 1].
//! - **Purple Team**: metrics measured during a joint Red/Blue exercise,
//!   scored over four pillars (coverage, detection, response, collaboration)
//!   into a global score out of 100 and a six-level maturity scale.
//! - **Fusion**: a weighted combination of both into a single index mapped
//!   onto six maturity tiers ("Niveau 0–1" to "Niveau 5"), or "Non
//!   déterminé" when an input lies outside [0, 1].
//!
//! ## Core Concepts & Modules
//!
//! - **[`scoring`]**: the shared primitives, a banding function and a
//!   weight-guarded weighted mean.
//! - **[`governance`]**: questionnaire model ([`WeightTable`],
//!   [`ResponseSheet`]) and the [`GovernanceScorer`].
//! - **[`purple`]**: exercise metrics ([`PurpleMetrics`]) and the
//!   [`PurpleScorer`].
//! - **[`fusion`]**: [`fuse`] and the [`MaturityTier`] scale.
//! - **[`input`]**: YAML/JSON loading and interactive acquisition.
//! - **[`reports`]**: summary, JSON and Markdown renderings of an
//!   [`AssessmentReport`].
//! - **[`config`]**: configuration file, presets and validation.
//!
//! ## Getting Started
//!
//! ```
//! use soc_maturity::{fuse, FusionWeights, MaturityTier};
//!
//! let result = fuse(0.82, 0.75, FusionWeights::default());
//! assert!((result.fused - 0.792).abs() < 1e-9);
//! assert_eq!(result.tier, MaturityTier::Pilote);
//! assert_eq!(result.tier.to_string(), "Niveau 3 (Piloté)");
//! ```
//!
//! Scoring an exercise:
//!
//! ```
//! use soc_maturity::purple::{
//!     CollaborationMetrics, CoverageMetrics, DetectionMetrics, MaturityLevel, PurpleMetrics,
//!     PurpleScorer, ResponseMetrics,
//! };
//!
//! let metrics = PurpleMetrics {
//!     coverage: CoverageMetrics {
//!         techniques_tested: 8.0,
//!         techniques_targeted: 10.0,
//!         tactics_covered: 7.0,
//!     },
//!     detection: DetectionMetrics {
//!         events_detected: 90.0,
//!         red_team_actions: 100.0,
//!         true_positives: 80.0,
//!         false_positives: 20.0,
//!         mttd_secs: 600.0,
//!     },
//!     response: ResponseMetrics {
//!         mttr_secs: 1200.0,
//!         missed_actions: 10.0,
//!     },
//!     collaboration: CollaborationMetrics {
//!         scenarios_documented: 9.0,
//!         scenarios_executed: 10.0,
//!         recommendations_applied: 3.0,
//!         recommendations_proposed: 4.0,
//!     },
//! };
//!
//! let report = PurpleScorer::new().score(&metrics)?;
//! assert_eq!(report.level, MaturityLevel::Stabilise);
//! # Ok::<(), soc_maturity::MaturityError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `soc-maturity` library crate. The
//! `soc-maturity` binary wraps the [`cli`] handlers.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Counts are f64 throughout; usize casts only feed answer counters
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    // Scorer methods keep self for a uniform API
    clippy::unused_self,
    // Variable names like `tp`/`fp` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod fusion;
pub mod governance;
pub mod input;
pub mod pipeline;
pub mod purple;
pub mod reports;
pub mod scoring;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, FusionConfig, GovernanceConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, MaturityError, OptionContext, Result};
pub use fusion::{fuse, FusionResult, FusionWeights, MaturityTier};
pub use governance::{
    score_governance, GovernanceReport, GovernanceScorer, ResponseSheet, UnknownValuePolicy,
    WeightTable,
};
pub use purple::{score_purple, MaturityLevel, PurpleMetrics, PurpleReport, PurpleScorer};
pub use reports::{AssessmentReport, ReportFormat, ReportGenerator};
