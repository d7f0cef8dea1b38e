//! Resolve scoring options from CLI flags, environment and defaults.

use crate::cli::ScoringArgs;
use talentfit_engine::{RecommendationOptions, ScoringWeights, DEFAULT_TOP_N};
use talentfit_state::{
    env_context_weight, env_experience_weight, env_min_score, env_skill_weight, env_top_n,
};

/// Options for one run. Each knob takes the flag, then its `TALENTFIT_*`
/// variable (already seeded from the config file), then the default.
pub fn resolve_options(args: &ScoringArgs) -> RecommendationOptions {
    let defaults = ScoringWeights::default();
    let weights = ScoringWeights::new(
        args.skill_weight
            .or_else(env_skill_weight)
            .unwrap_or(defaults.skill_weight),
        args.experience_weight
            .or_else(env_experience_weight)
            .unwrap_or(defaults.experience_weight),
        args.context_weight
            .or_else(env_context_weight)
            .unwrap_or(defaults.context_weight),
    );

    let options = RecommendationOptions {
        min_global_score: args.min_score.or_else(env_min_score).unwrap_or(0.0),
        department: args.department.clone(),
        skill_query: args.skill_query.clone(),
        top_n: args.top_n.or_else(env_top_n).unwrap_or(DEFAULT_TOP_N),
        weights,
        ..Default::default()
    };

    tracing::debug!(
        target: "talentfit::config",
        top_n = options.top_n,
        min_global_score = options.min_global_score,
        skill_weight = weights.skill_weight,
        experience_weight = weights.experience_weight,
        context_weight = weights.context_weight,
        "Resolved recommendation options"
    );

    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use talentfit_state::{ENV_MIN_SCORE, ENV_SKILL_WEIGHT, ENV_TOP_N};
    use talentfit_test_utils::set_env_var;

    #[test]
    #[serial]
    fn defaults_apply_when_nothing_is_set() {
        let _top = set_env_var(ENV_TOP_N, None);
        let _min = set_env_var(ENV_MIN_SCORE, None);
        let _skill = set_env_var(ENV_SKILL_WEIGHT, None);

        let options = resolve_options(&ScoringArgs::default());
        assert_eq!(options.top_n, DEFAULT_TOP_N);
        assert_eq!(options.min_global_score, 0.0);
        assert_eq!(options.weights, ScoringWeights::default());
    }

    #[test]
    #[serial]
    fn environment_fills_missing_flags() {
        let _top = set_env_var(ENV_TOP_N, Some("2"));
        let _min = set_env_var(ENV_MIN_SCORE, Some("75"));
        let _skill = set_env_var(ENV_SKILL_WEIGHT, Some("1"));

        let options = resolve_options(&ScoringArgs::default());
        assert_eq!(options.top_n, 2);
        assert_eq!(options.min_global_score, 75.0);
        assert_eq!(options.weights.skill_weight, 1.0);
        assert_eq!(options.weights.experience_weight, 0.25);
    }

    #[test]
    #[serial]
    fn flags_beat_environment() {
        let _top = set_env_var(ENV_TOP_N, Some("2"));
        let _min = set_env_var(ENV_MIN_SCORE, Some("75"));

        let args = ScoringArgs {
            top_n: Some(7),
            min_score: Some(10.0),
            department: Some("Sales".into()),
            ..Default::default()
        };
        let options = resolve_options(&args);
        assert_eq!(options.top_n, 7);
        assert_eq!(options.min_global_score, 10.0);
        assert_eq!(options.department.as_deref(), Some("Sales"));
    }
}
