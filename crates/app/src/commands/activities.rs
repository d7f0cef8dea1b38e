use crate::cli::{DatasetArgs, OutputFormat};
use crate::dataset::{resolve_dataset_path, Dataset};
use anyhow::Result;
use talentfit_engine::Activity;

/// Handle the `activities` command.
pub(crate) fn handle_activities_command(dataset: DatasetArgs, format: OutputFormat) -> Result<()> {
    let path = resolve_dataset_path(dataset.dataset.as_deref())?;
    let dataset = Dataset::load(&path)?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&dataset.activities)?);
        return Ok(());
    }

    if dataset.activities.is_empty() {
        println!("No activities found.");
        return Ok(());
    }
    for activity in &dataset.activities {
        println!("{}", summarize(activity));
    }
    Ok(())
}

fn summarize(activity: &Activity) -> String {
    let requirements = if activity.requirements.is_empty() {
        "no requirements".to_string()
    } else {
        activity
            .requirements
            .iter()
            .map(|r| format!("{} {}", r.name, r.desired_level))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{}  {} [{}] seats={}  {}",
        activity.id, activity.title, activity.department, activity.seat_count, requirements
    )
}
