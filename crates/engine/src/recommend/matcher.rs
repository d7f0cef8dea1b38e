//! Requirement matching with full and partial credit.

use crate::types::{Candidate, SkillRequirement};
use serde::{Deserialize, Serialize};

/// How one requirement was met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementOutcome {
    /// Skill present at or above the desired level.
    Full,
    /// Skill present below the desired level.
    Partial,
    /// Skill absent.
    Missing,
}

impl RequirementOutcome {
    /// Units credited for this outcome.
    pub fn credit(self) -> f64 {
        match self {
            RequirementOutcome::Full => 1.0,
            RequirementOutcome::Partial => 0.5,
            RequirementOutcome::Missing => 0.0,
        }
    }
}

/// Outcome for a single named requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementMatch {
    /// Requirement name as declared by the activity.
    pub requirement: String,
    /// How it was met.
    pub outcome: RequirementOutcome,
}

/// Tally of requirement units a candidate meets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Sum of per-requirement credit.
    pub matched_units: f64,
    /// Number of requirements.
    pub total_units: usize,
    /// Per-requirement outcomes in activity order.
    pub details: Vec<RequirementMatch>,
}

impl MatchResult {
    /// `matched / max(total, 1)`; zero when there are no requirements.
    pub fn ratio(&self) -> f64 {
        self.matched_units / self.total_units.max(1) as f64
    }

    /// Count of requirements with the given outcome.
    pub fn count(&self, outcome: RequirementOutcome) -> usize {
        self.details.iter().filter(|d| d.outcome == outcome).count()
    }
}

/// Compares a candidate's skills against an activity's requirements.
///
/// Names match case-insensitively and exactly. Should a profile repeat a
/// skill, the highest level wins.
pub fn match_requirements(candidate: &Candidate, requirements: &[SkillRequirement]) -> MatchResult {
    let details: Vec<RequirementMatch> = requirements
        .iter()
        .map(|req| RequirementMatch {
            requirement: req.name.clone(),
            outcome: evaluate(candidate, req),
        })
        .collect();

    MatchResult {
        matched_units: details.iter().map(|d| d.outcome.credit()).sum(),
        total_units: requirements.len(),
        details,
    }
}

fn evaluate(candidate: &Candidate, requirement: &SkillRequirement) -> RequirementOutcome {
    let wanted = requirement.name.to_lowercase();
    let best = candidate
        .skills
        .iter()
        .filter(|s| s.name.to_lowercase() == wanted)
        .map(|s| s.level.rank())
        .max();

    match best {
        None => RequirementOutcome::Missing,
        Some(rank) if rank >= requirement.desired_level.rank() => RequirementOutcome::Full,
        Some(_) => RequirementOutcome::Partial,
    }
}
