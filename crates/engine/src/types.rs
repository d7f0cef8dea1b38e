//! Record types consumed and produced by the recommendation engine.
//!
//! Field names serialize in camelCase so that records exported by the HR
//! front end (`employeeId`, `globalScore`, `desiredLevel`, ...) load as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal proficiency tag used both as a requirement threshold and as a
/// candidate attribute.
///
/// Parsing is case-insensitive and never fails: any unrecognized text becomes
/// [`SkillLevel::Unknown`], which ranks below every known level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SkillLevel {
    /// Level text that did not parse.
    Unknown,
    /// Basic proficiency.
    Low,
    /// Working proficiency.
    Medium,
    /// Expert proficiency.
    High,
}

impl SkillLevel {
    /// Ordinal rank: `Unknown = 0`, `Low = 1`, `Medium = 2`, `High = 3`.
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Unknown => 0,
            SkillLevel::Low => 1,
            SkillLevel::Medium => 2,
            SkillLevel::High => 3,
        }
    }

    /// Stable upper-case label.
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Unknown => "UNKNOWN",
            SkillLevel::Low => "LOW",
            SkillLevel::Medium => "MEDIUM",
            SkillLevel::High => "HIGH",
        }
    }

    /// Parses a level tag, falling back to [`SkillLevel::Unknown`].
    ///
    /// ```
    /// use talentfit_engine::SkillLevel;
    ///
    /// assert_eq!(SkillLevel::parse("medium"), SkillLevel::Medium);
    /// assert_eq!(SkillLevel::parse("guru"), SkillLevel::Unknown);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("low") {
            SkillLevel::Low
        } else if raw.eq_ignore_ascii_case("medium") {
            SkillLevel::Medium
        } else if raw.eq_ignore_ascii_case("high") {
            SkillLevel::High
        } else {
            SkillLevel::Unknown
        }
    }
}

impl From<String> for SkillLevel {
    fn from(raw: String) -> Self {
        SkillLevel::parse(&raw)
    }
}

impl From<SkillLevel> for String {
    fn from(level: SkillLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A skill an activity asks for, with the level it expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirement {
    /// Skill name.
    pub name: String,
    /// Minimum level for full credit.
    pub desired_level: SkillLevel,
}

impl SkillRequirement {
    /// Creates a requirement.
    pub fn new(name: impl Into<String>, desired_level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            desired_level,
        }
    }
}

/// A training or learning offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Owning department.
    pub department: String,
    /// Number of seats on offer.
    #[serde(default)]
    pub seat_count: u32,
    /// Required skills, in declaration order.
    #[serde(default)]
    pub requirements: Vec<SkillRequirement>,
}

/// One skill in a candidate's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSkill {
    /// Skill name.
    pub name: String,
    /// Assessed level.
    pub level: SkillLevel,
}

impl CandidateSkill {
    /// Creates a candidate skill.
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// An employee evaluated for fit against an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Unique employee identifier.
    pub employee_id: String,
    /// Full name.
    pub name: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Overall performance score, 0 to 100.
    pub global_score: f64,
    /// Years of professional experience.
    #[serde(default)]
    pub years_experience: f64,
    /// Skill profile, unique by name.
    #[serde(default)]
    pub skills: Vec<CandidateSkill>,
    /// Contact e-mail, when the source exports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Direct manager's name, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

impl Candidate {
    /// Returns true when any skill name contains `needle_lower`.
    ///
    /// `needle_lower` must already be lower-cased.
    pub fn has_skill_containing(&self, needle_lower: &str) -> bool {
        self.skills
            .iter()
            .any(|s| s.name.to_lowercase().contains(needle_lower))
    }
}

/// Relative weights of the three scoring factors.
///
/// Weights are taken as given: they are not normalized and need not sum to 1.
/// Totals above 1 simply push more candidates into the clamp at 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Weight of the skill match percentage.
    pub skill_weight: f64,
    /// Weight of the experience percentage.
    pub experience_weight: f64,
    /// Weight of the rescaled context boost.
    pub context_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.6,
            experience_weight: 0.25,
            context_weight: 0.15,
        }
    }
}

impl ScoringWeights {
    /// Creates a weight set.
    pub fn new(skill_weight: f64, experience_weight: f64, context_weight: f64) -> Self {
        Self {
            skill_weight,
            experience_weight,
            context_weight,
        }
    }

    /// Sum of the three weights.
    pub fn sum(&self) -> f64 {
        self.skill_weight + self.experience_weight + self.context_weight
    }
}

/// A candidate together with the score breakdown for one ranking run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    /// The evaluated candidate.
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Combined score, 0 to 100.
    pub score: u8,
    /// Share of requirement units met, 0 to 100.
    pub skill_match_pct: u8,
    /// Experience relative to the ceiling, 0 to 100.
    pub experience_pct: u8,
    /// Context boost in boost units (not a percentage).
    pub context_boost: i32,
    /// Requirement units credited (partial matches count 0.5).
    pub matched_units: f64,
    /// Requirement units on offer.
    pub total_units: usize,
    /// Human-readable summary of the score.
    #[serde(default)]
    pub explanation: String,
}

impl ScoredCandidate {
    /// Employee identifier of the scored candidate.
    pub fn employee_id(&self) -> &str {
        &self.candidate.employee_id
    }
}
