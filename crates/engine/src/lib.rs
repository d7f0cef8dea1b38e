//! Candidate-to-activity recommendation engine.
//!
//! Given a training activity with required skills and a pool of employee
//! candidates, this crate produces a ranked shortlist:
//! - Pool filtering by minimum score, department and skill text
//! - Requirement matching with full and partial credit
//! - Weighted scoring of skill match, experience and department relevance
//! - Stable ranking truncated to the top N
//!
//! Every stage is a pure function over its inputs; the engine holds no state
//! between calls and performs no I/O.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod recommend;
pub mod types;
pub mod validate;

pub use error::{EngineError, Result};
pub use recommend::{
    experience_pct, filter_candidates, generate_explanation, generate_recommendations,
    generate_recommendations_with, match_requirements, rank_candidates, score_candidate,
    to_percent, ContextBoostRule, MatchResult, PoolFilter, RecommendationOptions,
    RequirementMatch, RequirementOutcome, Scorer, WeightedScorer, CONTEXT_BOOST_SCALE,
    DEFAULT_TOP_N, DEPARTMENT_WILDCARD, EXPERIENCE_CEILING_YEARS,
};
pub use types::{
    Activity, Candidate, CandidateSkill, ScoredCandidate, ScoringWeights, SkillLevel,
    SkillRequirement,
};
pub use validate::{
    candidate_violations, pool_violations, validate_candidate, validate_min_score, validate_pool,
    validate_weights,
};
