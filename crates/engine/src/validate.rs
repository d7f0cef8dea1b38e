//! Input-contract checks for candidates, pools and weights.

use crate::error::{EngineError, Result};
use crate::types::{Candidate, ScoringWeights};
use std::collections::HashSet;

/// Every contract violation in a single candidate record.
pub fn candidate_violations(candidate: &Candidate) -> Vec<EngineError> {
    let mut violations = Vec::new();

    let score = candidate.global_score;
    if !score.is_finite() || !(0.0..=100.0).contains(&score) {
        violations.push(EngineError::GlobalScoreOutOfRange {
            employee_id: candidate.employee_id.clone(),
            value: score,
        });
    }

    let years = candidate.years_experience;
    if !years.is_finite() || years < 0.0 {
        violations.push(EngineError::InvalidExperience {
            employee_id: candidate.employee_id.clone(),
            value: years,
        });
    }

    let mut seen = HashSet::new();
    for skill in &candidate.skills {
        if !seen.insert(skill.name.to_lowercase()) {
            violations.push(EngineError::DuplicateSkill {
                employee_id: candidate.employee_id.clone(),
                skill: skill.name.clone(),
            });
        }
    }

    violations
}

/// Checks a single candidate record, failing on its first violation.
pub fn validate_candidate(candidate: &Candidate) -> Result<()> {
    match candidate_violations(candidate).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every contract violation in a pool, in pool order.
pub fn pool_violations(candidates: &[Candidate]) -> Vec<EngineError> {
    let mut violations = Vec::new();
    let mut ids = HashSet::new();

    for candidate in candidates {
        if !ids.insert(candidate.employee_id.as_str()) {
            violations.push(EngineError::DuplicateCandidate {
                employee_id: candidate.employee_id.clone(),
            });
        }
        violations.extend(candidate_violations(candidate));
    }

    violations
}

/// Fails on the first violation that stops a recommendation run.
///
/// See [`EngineError::blocks_ranking`]; repeated skill names pass.
pub fn validate_pool(candidates: &[Candidate]) -> Result<()> {
    match pool_violations(candidates)
        .into_iter()
        .find(EngineError::blocks_ranking)
    {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Rejects a non-finite minimum global score.
pub fn validate_min_score(min_global_score: f64) -> Result<()> {
    if min_global_score.is_finite() {
        Ok(())
    } else {
        Err(EngineError::NonFiniteMinScore {
            value: min_global_score,
        })
    }
}

/// Rejects non-finite weights. Range and sum are not checked.
pub fn validate_weights(weights: &ScoringWeights) -> Result<()> {
    let fields = [
        ("skillWeight", weights.skill_weight),
        ("experienceWeight", weights.experience_weight),
        ("contextWeight", weights.context_weight),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(EngineError::NonFiniteWeight { name, value });
        }
    }
    Ok(())
}
