//! Configuration file support for talentfit.
//!
//! Loads settings from `~/.talentfit/config.toml` (or `TALENTFIT_CONFIG`)
//! with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.talentfit/config.toml
//!
//! [recommend]
//! # Shortlist length
//! top_n = 5
//!
//! # Minimum global score for the candidate pool
//! min_global_score = 60
//!
//! # Factor weights
//! skill_weight = 0.6
//! experience_weight = 0.25
//! context_weight = 0.15
//!
//! # Dataset used when --dataset is omitted
//! dataset = "/srv/talentfit/dataset.json"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use talentfit_state::{
    config_path, ENV_CONTEXT_WEIGHT, ENV_DATASET, ENV_EXPERIENCE_WEIGHT, ENV_MIN_SCORE,
    ENV_SKILL_WEIGHT, ENV_TOP_N,
};

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Recommend command configuration.
    #[serde(default)]
    pub recommend: RecommendConfig,
}

/// Defaults for the recommend and approve commands.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecommendConfig {
    pub top_n: Option<i64>,
    pub min_global_score: Option<f64>,
    pub skill_weight: Option<f64>,
    pub experience_weight: Option<f64>,
    pub context_weight: Option<f64>,
    pub dataset: Option<String>,
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    load_config_from(&path)
}

/// Loads the configuration at `path`, if present.
pub fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&content)
        .with_context(|| format!("invalid config {}", path.display()))?;

    tracing::debug!(
        target: "talentfit::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file.
///
/// This should be called early in the application startup, before
/// parsing CLI arguments.
pub fn apply_config_to_env() {
    match load_config() {
        Ok(Some(config)) => apply_recommend_config_to_env(&config.recommend),
        Ok(None) => {}
        Err(err) => tracing::warn!(target: "talentfit::config", "{err:#}"),
    }
}

/// Applies recommend configuration to environment variables.
pub fn apply_recommend_config_to_env(recommend: &RecommendConfig) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(
                target: "talentfit::config",
                key,
                "Set environment variable from config file"
            );
        }
    }

    if let Some(top_n) = recommend.top_n {
        set_if_absent(ENV_TOP_N, &top_n.to_string());
    }
    if let Some(min) = recommend.min_global_score {
        set_if_absent(ENV_MIN_SCORE, &min.to_string());
    }
    if let Some(w) = recommend.skill_weight {
        set_if_absent(ENV_SKILL_WEIGHT, &w.to_string());
    }
    if let Some(w) = recommend.experience_weight {
        set_if_absent(ENV_EXPERIENCE_WEIGHT, &w.to_string());
    }
    if let Some(w) = recommend.context_weight {
        set_if_absent(ENV_CONTEXT_WEIGHT, &w.to_string());
    }
    if let Some(ref dataset) = recommend.dataset {
        set_if_absent(ENV_DATASET, dataset);
    }
}
