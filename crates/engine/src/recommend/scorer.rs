//! Multi-factor candidate scoring.

use super::explainer;
use super::matcher::MatchResult;
use crate::types::{Candidate, ScoredCandidate, ScoringWeights};
use serde::{Deserialize, Serialize};

/// Years of experience that earn full experience credit.
pub const EXPERIENCE_CEILING_YEARS: f64 = 8.0;

/// Multiplier bringing boost units into the 0-100 range of the other factors.
pub const CONTEXT_BOOST_SCALE: i32 = 10;

/// Boost units granted for organizational relevance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBoostRule {
    /// Boost when a department filter is active and the candidate belongs to it.
    pub matched: i32,
    /// Boost in every other case.
    pub baseline: i32,
}

impl Default for ContextBoostRule {
    fn default() -> Self {
        Self {
            matched: 6,
            baseline: 3,
        }
    }
}

impl ContextBoostRule {
    /// Boost for a candidate given the active department filter, if any.
    pub fn boost(&self, candidate_department: &str, department_filter: Option<&str>) -> i32 {
        match department_filter {
            Some(department) if department == candidate_department => self.matched,
            _ => self.baseline,
        }
    }
}

/// Trait for computing candidate scores.
pub trait Scorer: Send + Sync {
    /// Score one candidate from its requirement tally.
    fn score(
        &self,
        candidate: &Candidate,
        matched: &MatchResult,
        department_filter: Option<&str>,
    ) -> ScoredCandidate;
}

/// Weighted sum of skill match, experience and context boost.
#[derive(Debug, Clone, Default)]
pub struct WeightedScorer {
    weights: ScoringWeights,
    boost: ContextBoostRule,
}

impl WeightedScorer {
    /// Create a scorer with the given weights and the default boost rule.
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            boost: ContextBoostRule::default(),
        }
    }

    /// Replace the context boost rule.
    pub fn with_boost_rule(mut self, boost: ContextBoostRule) -> Self {
        self.boost = boost;
        self
    }

    /// Weights in use.
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl Scorer for WeightedScorer {
    fn score(
        &self,
        candidate: &Candidate,
        matched: &MatchResult,
        department_filter: Option<&str>,
    ) -> ScoredCandidate {
        score_candidate(
            candidate,
            matched,
            &self.weights,
            department_filter,
            &self.boost,
        )
    }
}

/// Rounds to the nearest integer and clamps into [0, 100].
///
/// Non-finite input yields 0.
pub fn to_percent(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Experience relative to [`EXPERIENCE_CEILING_YEARS`], as a clamped percentage.
pub fn experience_pct(years_experience: f64) -> u8 {
    to_percent(years_experience / EXPERIENCE_CEILING_YEARS * 100.0)
}

/// Scores one candidate. Never fails; every factor is clamped.
pub fn score_candidate(
    candidate: &Candidate,
    matched: &MatchResult,
    weights: &ScoringWeights,
    department_filter: Option<&str>,
    rule: &ContextBoostRule,
) -> ScoredCandidate {
    let skill_match_pct = to_percent(matched.ratio() * 100.0);
    let experience_pct = experience_pct(candidate.years_experience);
    let context_boost = rule.boost(&candidate.department, department_filter);
    let in_department = department_filter == Some(candidate.department.as_str());

    let raw = weights.skill_weight * f64::from(skill_match_pct)
        + weights.experience_weight * f64::from(experience_pct)
        + weights.context_weight * f64::from(context_boost.saturating_mul(CONTEXT_BOOST_SCALE));
    let score = to_percent(raw);

    let explanation =
        explainer::generate_explanation(matched, candidate.years_experience, in_department);

    tracing::trace!(
        target: "talentfit::engine",
        employee_id = %candidate.employee_id,
        score,
        skill_match_pct,
        experience_pct,
        context_boost,
        "scored candidate"
    );

    ScoredCandidate {
        candidate: candidate.clone(),
        score,
        skill_match_pct,
        experience_pct,
        context_boost,
        matched_units: matched.matched_units,
        total_units: matched.total_units,
        explanation,
    }
}
