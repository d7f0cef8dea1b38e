use crate::cli::{DatasetArgs, OutputFormat};
use crate::dataset::{resolve_dataset_path, Dataset};
use anyhow::{bail, Result};
use serde::Serialize;
use talentfit_engine::{pool_violations, SkillLevel};

/// Outcome of checking a dataset.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidationReport {
    pub activities: usize,
    pub candidates: usize,
    /// Contract violations; any of these fails the command.
    pub errors: Vec<String>,
    /// Suspicious but accepted input.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let errors = pool_violations(&dataset.candidates)
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut warnings = Vec::new();
        for activity in &dataset.activities {
            for req in &activity.requirements {
                if req.desired_level == SkillLevel::Unknown {
                    warnings.push(format!(
                        "activity '{}': requirement '{}' has an unrecognised level",
                        activity.id, req.name
                    ));
                }
            }
        }
        for candidate in &dataset.candidates {
            for skill in &candidate.skills {
                if skill.level == SkillLevel::Unknown {
                    warnings.push(format!(
                        "candidate '{}': skill '{}' has an unrecognised level",
                        candidate.employee_id, skill.name
                    ));
                }
            }
        }

        Self {
            activities: dataset.activities.len(),
            candidates: dataset.candidates.len(),
            errors,
            warnings,
        }
    }
}

/// Handle the `validate` command.
pub(crate) fn handle_validate_command(dataset: DatasetArgs, format: OutputFormat) -> Result<()> {
    let path = resolve_dataset_path(dataset.dataset.as_deref())?;
    let dataset = Dataset::load(&path)?;
    let report = ValidationReport::from_dataset(&dataset);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Validated {} activities and {} candidates: {} errors, {} warnings",
            report.activities,
            report.candidates,
            report.errors.len(),
            report.warnings.len()
        );
        for err in &report.errors {
            println!("  error: {err}");
        }
        for warning in &report.warnings {
            println!("  warning: {warning}");
        }
    }

    if !report.errors.is_empty() {
        bail!("{} contract violation(s) in {}", report.errors.len(), path.display());
    }
    Ok(())
}
