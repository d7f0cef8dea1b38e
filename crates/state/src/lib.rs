//! Manages application state and configuration.
//!
//! This crate provides utilities for:
//! - Reading `TALENTFIT_*` environment variables for configuration.
//! - Tracking the operator session that gates shortlist approval.

pub mod env;
pub mod session;

pub use env::{
    config_path, env_context_weight, env_dataset, env_experience_weight, env_min_score,
    env_skill_weight, env_top_n, home_dir, ENV_CONFIG, ENV_CONTEXT_WEIGHT, ENV_DATASET,
    ENV_EXPERIENCE_WEIGHT, ENV_MIN_SCORE, ENV_OPERATOR, ENV_ROLE, ENV_SKILL_WEIGHT, ENV_TOP_N,
};
pub use session::{Role, Session, SessionError};
