//! Shared test utilities for talentfit crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the talentfit workspace.

use std::path::{Path, PathBuf};

use talentfit_engine::{Activity, Candidate, CandidateSkill, SkillLevel, SkillRequirement};

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// Tests calling this should be marked `#[serial_test::serial]`.
///
/// # Example
/// ```
/// let _guard = talentfit_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Build a candidate with the given skills and sensible defaults elsewhere.
///
/// Defaults: department `Engineering`, position `Developer`,
/// `globalScore` 80, `yearsExperience` 4.
pub fn candidate(employee_id: &str, skills: &[(&str, SkillLevel)]) -> Candidate {
    Candidate {
        employee_id: employee_id.to_string(),
        name: format!("Employee {employee_id}"),
        department: "Engineering".to_string(),
        position: "Developer".to_string(),
        global_score: 80.0,
        years_experience: 4.0,
        skills: skills
            .iter()
            .map(|(name, level)| CandidateSkill::new(*name, *level))
            .collect(),
        email: None,
        manager: None,
    }
}

/// Build an activity in the `Engineering` department with two seats.
pub fn activity(id: &str, requirements: &[(&str, SkillLevel)]) -> Activity {
    Activity {
        id: id.to_string(),
        title: format!("Activity {id}"),
        department: "Engineering".to_string(),
        seat_count: 2,
        requirements: requirements
            .iter()
            .map(|(name, level)| SkillRequirement::new(*name, *level))
            .collect(),
    }
}

/// The frontend activity used across scenario tests:
/// React at MEDIUM and TypeScript at LOW.
pub fn frontend_activity() -> Activity {
    activity(
        "frontend-101",
        &[("React", SkillLevel::Medium), ("TypeScript", SkillLevel::Low)],
    )
}

/// A small mixed pool spanning two departments.
pub fn sample_pool() -> Vec<Candidate> {
    let mut ada = candidate(
        "e-001",
        &[("React", SkillLevel::High), ("TypeScript", SkillLevel::Medium)],
    );
    ada.global_score = 92.0;
    ada.years_experience = 6.0;

    let mut ben = candidate("e-002", &[("React", SkillLevel::Low)]);
    ben.global_score = 81.0;
    ben.years_experience = 2.0;

    let mut cleo = candidate("e-003", &[("SEO", SkillLevel::High)]);
    cleo.department = "Marketing".to_string();
    cleo.global_score = 76.0;
    cleo.years_experience = 9.0;

    let mut dev = candidate(
        "e-004",
        &[("react", SkillLevel::Medium), ("TypeScript", SkillLevel::Low)],
    );
    dev.global_score = 84.0;
    dev.years_experience = 3.0;

    vec![ada, ben, cleo, dev]
}

/// Dataset files in a temporary directory.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct DatasetFixture {
    pub tempdir: tempfile::TempDir,
}

impl DatasetFixture {
    /// Create an empty fixture directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            tempdir: tempfile::tempdir()?,
        })
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Write a JSON dataset `{ activities, candidates }` and return its path.
    pub fn write_json(
        &self,
        name: &str,
        activities: &[Activity],
        candidates: &[Candidate],
    ) -> std::io::Result<PathBuf> {
        let document = serde_json::json!({
            "activities": activities,
            "candidates": candidates,
        });
        let text = serde_json::to_string_pretty(&document).map_err(std::io::Error::other)?;
        self.write_raw(name, &text)
    }

    /// Write the frontend activity and sample pool as JSON.
    pub fn write_sample(&self) -> std::io::Result<PathBuf> {
        self.write_json("dataset.json", &[frontend_activity()], &sample_pool())
    }

    /// Write arbitrary text to a file under the fixture directory.
    pub fn write_raw(&self, name: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.tempdir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}
