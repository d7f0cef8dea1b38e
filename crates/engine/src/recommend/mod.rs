//! Candidate shortlists for an activity: filter, match, score, rank.

mod explainer;
pub mod filter;
pub mod matcher;
pub mod ranker;
pub mod scorer;

pub use explainer::generate_explanation;
pub use filter::{filter_candidates, PoolFilter, DEPARTMENT_WILDCARD};
pub use matcher::{match_requirements, MatchResult, RequirementMatch, RequirementOutcome};
pub use ranker::rank_candidates;
pub use scorer::{
    experience_pct, score_candidate, to_percent, ContextBoostRule, Scorer, WeightedScorer,
    CONTEXT_BOOST_SCALE, EXPERIENCE_CEILING_YEARS,
};

use crate::error::Result;
use crate::types::{Activity, Candidate, ScoredCandidate, ScoringWeights};
use crate::validate::{validate_min_score, validate_pool, validate_weights};
use serde::{Deserialize, Serialize};

/// Default shortlist length.
pub const DEFAULT_TOP_N: i64 = 5;

/// Caller-supplied knobs for one recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationOptions {
    /// Minimum `globalScore` (inclusive).
    #[serde(default)]
    pub min_global_score: f64,
    /// Department filter; `None` or `"all"` means any.
    #[serde(default)]
    pub department: Option<String>,
    /// Free-text skill filter.
    #[serde(default)]
    pub skill_query: Option<String>,
    /// Shortlist length; zero or negative gives an empty shortlist.
    #[serde(default = "default_top_n")]
    pub top_n: i64,
    /// Factor weights.
    #[serde(default)]
    pub weights: ScoringWeights,
    /// Context boost units.
    #[serde(default)]
    pub context_boost: ContextBoostRule,
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N
}

impl Default for RecommendationOptions {
    fn default() -> Self {
        Self {
            min_global_score: 0.0,
            department: None,
            skill_query: None,
            top_n: DEFAULT_TOP_N,
            weights: ScoringWeights::default(),
            context_boost: ContextBoostRule::default(),
        }
    }
}

impl RecommendationOptions {
    /// The pool filter these options describe.
    pub fn pool_filter(&self) -> PoolFilter {
        PoolFilter {
            min_global_score: self.min_global_score,
            department: self.department.clone(),
            skill_query: self.skill_query.clone(),
        }
    }

    /// A [`WeightedScorer`] built from the weights and boost rule.
    pub fn scorer(&self) -> WeightedScorer {
        WeightedScorer::new(self.weights).with_boost_rule(self.context_boost)
    }
}

/// Ranked shortlist of candidates for an activity.
///
/// Fails only on input-contract violations (duplicate ids, out-of-range
/// records, non-finite weights or minimum score). Repeated skill names in a
/// record are tolerated. Empty pools and `top_n <= 0` give an empty list.
///
/// ```
/// use talentfit_engine::{
///     generate_recommendations, Activity, Candidate, CandidateSkill, RecommendationOptions,
///     SkillLevel, SkillRequirement,
/// };
///
/// let activity = Activity {
///     id: "act-1".into(),
///     title: "Frontend bootcamp".into(),
///     department: "Engineering".into(),
///     seat_count: 2,
///     requirements: vec![SkillRequirement::new("React", SkillLevel::Medium)],
/// };
/// let pool = vec![Candidate {
///     employee_id: "e1".into(),
///     name: "Ada".into(),
///     department: "Engineering".into(),
///     position: "Developer".into(),
///     global_score: 91.0,
///     years_experience: 4.0,
///     skills: vec![CandidateSkill::new("React", SkillLevel::High)],
///     email: None,
///     manager: None,
/// }];
///
/// let ranked = generate_recommendations(&activity, &pool, &RecommendationOptions::default())
///     .unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].skill_match_pct, 100);
/// ```
pub fn generate_recommendations(
    activity: &Activity,
    candidate_pool: &[Candidate],
    options: &RecommendationOptions,
) -> Result<Vec<ScoredCandidate>> {
    validate_weights(&options.weights)?;
    generate_recommendations_with(&options.scorer(), activity, candidate_pool, options)
}

/// Same pipeline as [`generate_recommendations`] with a caller-provided scorer.
///
/// The scorer replaces the options' weights and boost rule.
pub fn generate_recommendations_with(
    scorer: &dyn Scorer,
    activity: &Activity,
    candidate_pool: &[Candidate],
    options: &RecommendationOptions,
) -> Result<Vec<ScoredCandidate>> {
    validate_min_score(options.min_global_score)?;
    validate_pool(candidate_pool)?;

    let filter = options.pool_filter();
    let department = filter.active_department();
    let eligible = filter_candidates(candidate_pool, &filter);

    tracing::debug!(
        target: "talentfit::engine",
        activity = %activity.id,
        pool = candidate_pool.len(),
        eligible = eligible.len(),
        requirements = activity.requirements.len(),
        "filtered candidate pool"
    );

    let scored: Vec<ScoredCandidate> = eligible
        .into_iter()
        .map(|candidate| {
            let matched = match_requirements(candidate, &activity.requirements);
            scorer.score(candidate, &matched, department)
        })
        .collect();

    let ranked = rank_candidates(scored, options.top_n);

    tracing::debug!(
        target: "talentfit::engine",
        activity = %activity.id,
        ranked = ranked.len(),
        top_n = options.top_n,
        "ranked candidates"
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::types::{CandidateSkill, SkillLevel, SkillRequirement};

    fn activity() -> Activity {
        Activity {
            id: "act-1".into(),
            title: "Frontend bootcamp".into(),
            department: "Engineering".into(),
            seat_count: 3,
            requirements: vec![
                SkillRequirement::new("React", SkillLevel::Medium),
                SkillRequirement::new("TypeScript", SkillLevel::Low),
            ],
        }
    }

    fn candidate(
        id: &str,
        department: &str,
        score: f64,
        skills: &[(&str, SkillLevel)],
    ) -> Candidate {
        Candidate {
            employee_id: id.into(),
            name: id.into(),
            department: department.into(),
            position: "Developer".into(),
            global_score: score,
            years_experience: 4.0,
            skills: skills
                .iter()
                .map(|(n, l)| CandidateSkill::new(*n, *l))
                .collect(),
            email: None,
            manager: None,
        }
    }

    #[test]
    fn pipeline_filters_scores_and_ranks() {
        let pool = vec![
            candidate("weak", "Engineering", 85.0, &[("React", SkillLevel::Low)]),
            candidate(
                "strong",
                "Engineering",
                90.0,
                &[("React", SkillLevel::High), ("TypeScript", SkillLevel::Medium)],
            ),
            candidate("low-score", "Engineering", 40.0, &[("React", SkillLevel::High)]),
        ];
        let options = RecommendationOptions {
            min_global_score: 50.0,
            ..Default::default()
        };

        let ranked = generate_recommendations(&activity(), &pool, &options).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].employee_id(), "strong");
        assert_eq!(ranked[0].skill_match_pct, 100);
        assert_eq!(ranked[1].employee_id(), "weak");
        assert_eq!(ranked[1].skill_match_pct, 25);
        assert_eq!(ranked[1].matched_units, 0.5);
    }

    #[test]
    fn department_filter_applies_matched_boost() {
        let pool = vec![candidate("e1", "Engineering", 90.0, &[])];
        let options = RecommendationOptions {
            department: Some("Engineering".into()),
            ..Default::default()
        };

        let ranked = generate_recommendations(&activity(), &pool, &options).unwrap();
        assert_eq!(ranked[0].context_boost, 6);

        let ranked =
            generate_recommendations(&activity(), &pool, &RecommendationOptions::default())
                .unwrap();
        assert_eq!(ranked[0].context_boost, 3);
    }

    #[test]
    fn wildcard_department_keeps_baseline_boost() {
        let pool = vec![candidate("e1", "Engineering", 90.0, &[])];
        let options = RecommendationOptions {
            department: Some("all".into()),
            ..Default::default()
        };

        let ranked = generate_recommendations(&activity(), &pool, &options).unwrap();
        assert_eq!(ranked[0].context_boost, 3);
    }

    #[test]
    fn nobody_above_minimum_gives_empty_list() {
        let pool = vec![
            candidate("e1", "Engineering", 89.0, &[]),
            candidate("e2", "Engineering", 70.0, &[]),
        ];
        let options = RecommendationOptions {
            min_global_score: 90.0,
            top_n: 10,
            ..Default::default()
        };

        assert!(generate_recommendations(&activity(), &pool, &options)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn duplicate_employee_ids_are_rejected() {
        let pool = vec![
            candidate("e1", "Engineering", 90.0, &[]),
            candidate("e1", "Sales", 80.0, &[]),
        ];

        let err = generate_recommendations(&activity(), &pool, &RecommendationOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            EngineError::DuplicateCandidate {
                employee_id: "e1".into()
            }
        );
    }

    #[test]
    fn repeated_skill_in_one_record_does_not_abort_ranking() {
        let pool = vec![
            candidate("e1", "Engineering", 90.0, &[("TypeScript", SkillLevel::Low)]),
            candidate(
                "e-dup",
                "Engineering",
                85.0,
                &[("React", SkillLevel::High), ("react", SkillLevel::Low)],
            ),
        ];

        let ranked =
            generate_recommendations(&activity(), &pool, &RecommendationOptions::default())
                .unwrap();

        assert_eq!(ranked.len(), 2);
        let dup = ranked.iter().find(|s| s.employee_id() == "e-dup").unwrap();
        assert_eq!(dup.matched_units, 1.0);
    }

    #[test]
    fn non_finite_min_score_is_rejected() {
        let pool = vec![candidate("e1", "Engineering", 90.0, &[])];
        for value in [f64::NAN, f64::INFINITY] {
            let options = RecommendationOptions {
                min_global_score: value,
                top_n: 10,
                ..Default::default()
            };
            assert!(matches!(
                generate_recommendations(&activity(), &pool, &options),
                Err(EngineError::NonFiniteMinScore { .. })
            ));
        }
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let options = RecommendationOptions {
            weights: ScoringWeights::new(f64::INFINITY, 0.0, 0.0),
            ..Default::default()
        };
        assert!(generate_recommendations(&activity(), &[], &options).is_err());
    }

    #[test]
    fn custom_scorer_replaces_weighted_scorer() {
        struct FlatScorer;

        impl Scorer for FlatScorer {
            fn score(
                &self,
                candidate: &Candidate,
                matched: &MatchResult,
                department_filter: Option<&str>,
            ) -> ScoredCandidate {
                let mut scored = score_candidate(
                    candidate,
                    matched,
                    &ScoringWeights::new(0.0, 0.0, 0.0),
                    department_filter,
                    &ContextBoostRule::default(),
                );
                scored.score = 42;
                scored
            }
        }

        let pool = vec![candidate("e1", "Engineering", 90.0, &[])];
        let ranked = generate_recommendations_with(
            &FlatScorer,
            &activity(),
            &pool,
            &RecommendationOptions::default(),
        )
        .unwrap();

        assert_eq!(ranked[0].score, 42);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: RecommendationOptions =
            serde_json::from_str(r#"{ "minGlobalScore": 60, "department": "Sales" }"#)
                .expect("valid options json");

        assert_eq!(options.min_global_score, 60.0);
        assert_eq!(options.department.as_deref(), Some("Sales"));
        assert_eq!(options.top_n, DEFAULT_TOP_N);
        assert_eq!(options.weights, ScoringWeights::default());
    }
}
