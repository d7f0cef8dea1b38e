//! End-to-end shortlist scenarios and properties for the recommendation pipeline.

use proptest::prelude::*;
use talentfit_engine::{
    filter_candidates, generate_recommendations, match_requirements, score_candidate,
    Candidate, CandidateSkill, ContextBoostRule, EngineError, PoolFilter, RecommendationOptions,
    ScoringWeights, SkillLevel, SkillRequirement,
};
use talentfit_test_utils::{candidate, frontend_activity, sample_pool};

#[test]
fn given_strong_profile_when_matched_then_every_requirement_is_met() {
    let c = candidate(
        "e-100",
        &[("React", SkillLevel::High), ("TypeScript", SkillLevel::Medium)],
    );
    let matched = match_requirements(&c, &frontend_activity().requirements);

    assert_eq!(matched.matched_units, 2.0);
    assert_eq!(matched.total_units, 2);

    let scored = score_candidate(
        &c,
        &matched,
        &ScoringWeights::default(),
        None,
        &ContextBoostRule::default(),
    );
    assert_eq!(scored.skill_match_pct, 100);
}

#[test]
fn given_partial_profile_when_matched_then_half_credit_is_given() {
    let c = candidate("e-101", &[("React", SkillLevel::Low)]);
    let matched = match_requirements(&c, &frontend_activity().requirements);

    assert_eq!(matched.matched_units, 0.5);
    assert_eq!(matched.total_units, 2);

    let scored = score_candidate(
        &c,
        &matched,
        &ScoringWeights::default(),
        None,
        &ContextBoostRule::default(),
    );
    assert_eq!(scored.skill_match_pct, 25);
}

#[test]
fn given_four_scores_when_top_two_requested_then_highest_two_in_order() {
    // Skill-only weights make the score equal to the skill match, so the
    // pool below produces scores 92, 81, 76 and 84 in employee id order.
    let mut activity = frontend_activity();
    activity.requirements = (0..100)
        .map(|i| SkillRequirement::new(format!("skill-{i}"), SkillLevel::Low))
        .collect();
    let pool: Vec<Candidate> = [("e-1", 92), ("e-2", 81), ("e-3", 76), ("e-4", 84)]
        .into_iter()
        .map(|(id, met)| {
            let mut c = candidate(id, &[]);
            c.skills = activity.requirements[..met]
                .iter()
                .map(|r| CandidateSkill::new(r.name.clone(), SkillLevel::High))
                .collect();
            c
        })
        .collect();

    let options = RecommendationOptions {
        top_n: 2,
        weights: ScoringWeights::new(1.0, 0.0, 0.0),
        ..Default::default()
    };
    let ranked = generate_recommendations(&activity, &pool, &options).unwrap();

    let scores: Vec<u8> = ranked.iter().map(|s| s.score).collect();
    assert_eq!(scores, [92, 84]);
    assert_eq!(ranked[0].employee_id(), "e-1");
    assert_eq!(ranked[1].employee_id(), "e-4");
}

#[test]
fn given_high_minimum_when_nobody_qualifies_then_result_is_empty() {
    for top_n in [1, 5, 100] {
        let options = RecommendationOptions {
            min_global_score: 93.0,
            top_n,
            ..Default::default()
        };
        let ranked = generate_recommendations(&frontend_activity(), &sample_pool(), &options)
            .unwrap();
        assert!(ranked.is_empty());
    }
}

#[test]
fn given_minimum_ninety_then_only_high_performers_remain() {
    let options = RecommendationOptions {
        min_global_score: 90.0,
        ..Default::default()
    };
    let ranked =
        generate_recommendations(&frontend_activity(), &sample_pool(), &options).unwrap();

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].employee_id(), "e-001");
}

#[test]
fn given_equal_scores_then_pool_order_is_kept() {
    let pool: Vec<Candidate> = ["z", "y", "x"]
        .into_iter()
        .map(|id| candidate(id, &[("React", SkillLevel::High)]))
        .collect();

    let ranked =
        generate_recommendations(&frontend_activity(), &pool, &RecommendationOptions::default())
            .unwrap();

    let ids: Vec<_> = ranked.iter().map(|s| s.employee_id()).collect();
    assert_eq!(ids, ["z", "y", "x"]);
}

#[test]
fn given_unknown_level_in_json_then_record_still_loads_and_scores() {
    let json = r#"{
        "employeeId": "e-200",
        "name": "Lin",
        "department": "Engineering",
        "position": "QA",
        "globalScore": 70,
        "yearsExperience": 2,
        "skills": [
            { "name": "React", "level": "EXPERT" },
            { "name": "TypeScript", "level": "low" }
        ]
    }"#;
    let c: Candidate = serde_json::from_str(json).unwrap();
    assert_eq!(c.skills[0].level, SkillLevel::Unknown);
    assert_eq!(c.skills[1].level, SkillLevel::Low);

    let ranked =
        generate_recommendations(&frontend_activity(), &[c], &RecommendationOptions::default())
            .unwrap();
    // React present below MEDIUM (0.5) and TypeScript met (1.0).
    assert_eq!(ranked[0].matched_units, 1.5);
    assert_eq!(ranked[0].skill_match_pct, 75);
}

#[test]
fn given_record_with_repeated_skill_then_rest_of_pool_still_ranks() {
    let mut pool = sample_pool();
    pool.push(candidate(
        "e-dup",
        &[("React", SkillLevel::High), ("react", SkillLevel::Low)],
    ));
    let options = RecommendationOptions {
        top_n: 10,
        ..Default::default()
    };

    let ranked = generate_recommendations(&frontend_activity(), &pool, &options).unwrap();

    assert_eq!(ranked.len(), 5);
    let dup = ranked
        .iter()
        .find(|s| s.employee_id() == "e-dup")
        .expect("record with repeated skill is ranked");
    // The HIGH entry wins: React met, TypeScript missing.
    assert_eq!(dup.matched_units, 1.0);
}

#[test]
fn given_nan_minimum_then_run_is_rejected_instead_of_keeping_everyone() {
    let options = RecommendationOptions {
        min_global_score: f64::NAN,
        top_n: 10,
        ..Default::default()
    };
    let result = generate_recommendations(&frontend_activity(), &sample_pool(), &options);
    assert!(matches!(result, Err(EngineError::NonFiniteMinScore { .. })));
}

#[test]
fn scored_candidate_serializes_flat_camel_case() {
    let ranked = generate_recommendations(
        &frontend_activity(),
        &sample_pool(),
        &RecommendationOptions::default(),
    )
    .unwrap();
    let value = serde_json::to_value(&ranked[0]).unwrap();

    assert_eq!(value["employeeId"], "e-001");
    assert!(value["skillMatchPct"].is_u64());
    assert!(value["experiencePct"].is_u64());
    assert!(value["contextBoost"].is_i64());
    assert!(value.get("candidate").is_none());
}

fn level_strategy() -> impl Strategy<Value = SkillLevel> {
    prop_oneof![
        Just(SkillLevel::Unknown),
        Just(SkillLevel::Low),
        Just(SkillLevel::Medium),
        Just(SkillLevel::High),
    ]
}

fn candidate_strategy() -> impl Strategy<Value = Candidate> {
    (
        0.0f64..=100.0,
        0.0f64..30.0,
        prop::sample::select(vec!["Engineering", "Marketing", "Sales"]),
        prop::collection::vec(
            (
                prop::sample::select(vec!["React", "TypeScript", "Rust", "SEO", "SQL"]),
                level_strategy(),
            ),
            0..5,
        ),
    )
        .prop_map(|(score, years, department, skills)| {
            let mut seen = std::collections::HashSet::new();
            let skills = skills
                .into_iter()
                .filter(|(name, _)| seen.insert(*name))
                .map(|(name, level)| CandidateSkill::new(name, level))
                .collect();
            Candidate {
                employee_id: String::new(),
                name: "Prop".into(),
                department: department.to_string(),
                position: String::new(),
                global_score: score,
                years_experience: years,
                skills,
                email: None,
                manager: None,
            }
        })
}

fn pool_strategy() -> impl Strategy<Value = Vec<Candidate>> {
    prop::collection::vec(candidate_strategy(), 0..12).prop_map(|mut pool| {
        for (i, c) in pool.iter_mut().enumerate() {
            c.employee_id = format!("p-{i}");
        }
        pool
    })
}

fn weights_strategy() -> impl Strategy<Value = ScoringWeights> {
    (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
        .prop_map(|(s, e, c)| ScoringWeights::new(s, e, c))
}

proptest! {
    /// Property: every factor of every scored candidate stays within [0, 100].
    #[test]
    fn scores_are_bounded(pool in pool_strategy(), weights in weights_strategy()) {
        let options = RecommendationOptions { top_n: 100, weights, ..Default::default() };
        let ranked = generate_recommendations(&frontend_activity(), &pool, &options).unwrap();
        for s in &ranked {
            prop_assert!(s.score <= 100);
            prop_assert!(s.skill_match_pct <= 100);
            prop_assert!(s.experience_pct <= 100);
        }
    }

    /// Property: output length is min(top_n, filtered size) and scores never increase.
    #[test]
    fn ranking_is_sorted_and_truncated(
        pool in pool_strategy(),
        top_n in -3i64..15,
        min_score in 0.0f64..100.0,
    ) {
        let options = RecommendationOptions {
            top_n,
            min_global_score: min_score,
            ..Default::default()
        };
        let filtered = filter_candidates(&pool, &options.pool_filter()).len();
        let ranked = generate_recommendations(&frontend_activity(), &pool, &options).unwrap();

        let expected = if top_n <= 0 { 0 } else { filtered.min(top_n as usize) };
        prop_assert_eq!(ranked.len(), expected);
        prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    /// Property: filtering an already-filtered pool changes nothing.
    #[test]
    fn filtering_is_idempotent(
        pool in pool_strategy(),
        min_score in 0.0f64..100.0,
        department in prop::option::of(prop::sample::select(vec!["Engineering", "Sales", "all"])),
        query in prop::option::of(prop::sample::select(vec!["re", "SQL", "type", ""])),
    ) {
        let filter = PoolFilter {
            min_global_score: min_score,
            department: department.map(str::to_string),
            skill_query: query.map(str::to_string),
        };
        let once: Vec<Candidate> = filter_candidates(&pool, &filter).into_iter().cloned().collect();
        let twice: Vec<Candidate> = filter_candidates(&once, &filter).into_iter().cloned().collect();
        prop_assert_eq!(once, twice);
    }

    /// Property: skill-only weights make the score equal the skill match percentage.
    #[test]
    fn skill_only_weights_score_equals_skill_match(pool in pool_strategy()) {
        let options = RecommendationOptions {
            top_n: 100,
            weights: ScoringWeights::new(1.0, 0.0, 0.0),
            ..Default::default()
        };
        let ranked = generate_recommendations(&frontend_activity(), &pool, &options).unwrap();
        for s in &ranked {
            prop_assert_eq!(s.score, s.skill_match_pct);
        }
    }
}
