//! Scoring primitives shared by every scorer.
//!
//! - [`band`] turns a continuous value into a tiered score using an ordered
//!   threshold table (MTTD/MTTR bands, maturity levels, fusion tiers).
//! - [`weighted_mean`] and [`grouped_weighted_mean`] implement the single
//!   reduction used at each level of the questionnaire hierarchy.
//!
//! Both are pure functions. A zero weight sum resolves to `0.0` instead of
//! dividing by zero, and [`ratio`] applies the same rule to plain quotients.

mod aggregate;
mod band;

pub use aggregate::{grouped_weighted_mean, ratio, weighted_mean};
pub use band::{band, Band};
