//! Purple Team exercise maturity scoring.
//!
//! Exercise metrics feed four pillars (coverage, detection, response and
//! collaboration), each scored on 0-100. Their fixed-weight sum is the global
//! score, which maps to a maturity level from 0 (Faible) to 5 (Optimisé).

mod metrics;
mod scorer;

pub use metrics::{
    CollaborationMetrics, CoverageMetrics, DetectionMetrics, PurpleMetrics, ResponseMetrics,
    ATTACK_TACTICS,
};
pub use scorer::{
    score_purple, MaturityLevel, PillarScores, PillarWeights, PurpleReport, PurpleScorer,
    LEVEL_BANDS, MTTD_BANDS, MTTR_BANDS, PILLAR_WEIGHTS,
};
