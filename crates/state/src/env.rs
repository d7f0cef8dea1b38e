use anyhow::Result;
use std::path::PathBuf;

/// Overrides the config file location.
pub const ENV_CONFIG: &str = "TALENTFIT_CONFIG";
/// Default dataset path.
pub const ENV_DATASET: &str = "TALENTFIT_DATASET";
/// Shortlist length.
pub const ENV_TOP_N: &str = "TALENTFIT_TOP_N";
/// Minimum `globalScore` for the pool filter.
pub const ENV_MIN_SCORE: &str = "TALENTFIT_MIN_SCORE";
/// Weight of the skill factor.
pub const ENV_SKILL_WEIGHT: &str = "TALENTFIT_SKILL_WEIGHT";
/// Weight of the experience factor.
pub const ENV_EXPERIENCE_WEIGHT: &str = "TALENTFIT_EXPERIENCE_WEIGHT";
/// Weight of the department context factor.
pub const ENV_CONTEXT_WEIGHT: &str = "TALENTFIT_CONTEXT_WEIGHT";
/// Operator name for the session.
pub const ENV_OPERATOR: &str = "TALENTFIT_OPERATOR";
/// Operator role for the session.
pub const ENV_ROLE: &str = "TALENTFIT_ROLE";

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns the path to the config file.
///
/// `TALENTFIT_CONFIG` wins; otherwise `~/.talentfit/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(custom) = non_empty(ENV_CONFIG) {
        return Some(PathBuf::from(custom));
    }
    home_dir().ok().map(|h| h.join(".talentfit/config.toml"))
}

/// Returns the dataset path from `TALENTFIT_DATASET`.
pub fn env_dataset() -> Option<PathBuf> {
    non_empty(ENV_DATASET).map(PathBuf::from)
}

/// Returns the shortlist length from `TALENTFIT_TOP_N`.
pub fn env_top_n() -> Option<i64> {
    parsed(ENV_TOP_N)
}

/// Returns the minimum global score from `TALENTFIT_MIN_SCORE`.
pub fn env_min_score() -> Option<f64> {
    parsed(ENV_MIN_SCORE)
}

/// Returns the skill weight from `TALENTFIT_SKILL_WEIGHT`.
pub fn env_skill_weight() -> Option<f64> {
    parsed(ENV_SKILL_WEIGHT)
}

/// Returns the experience weight from `TALENTFIT_EXPERIENCE_WEIGHT`.
pub fn env_experience_weight() -> Option<f64> {
    parsed(ENV_EXPERIENCE_WEIGHT)
}

/// Returns the context weight from `TALENTFIT_CONTEXT_WEIGHT`.
pub fn env_context_weight() -> Option<f64> {
    parsed(ENV_CONTEXT_WEIGHT)
}

pub(crate) fn non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = non_empty(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(target: "talentfit::config", key, value = %raw, "ignoring unparsable value");
            None
        }
    }
}
