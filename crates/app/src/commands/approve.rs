use crate::cli::{DatasetArgs, ScoringArgs};
use crate::dataset::{resolve_dataset_path, Dataset};
use crate::options::resolve_options;
use crate::shortlist::{approve, ActivityShortlist};
use anyhow::{Context, Result};
use std::path::PathBuf;
use talentfit_state::Session;

/// Handle the `approve` command.
pub(crate) fn handle_approve_command(
    activity: String,
    out: Option<PathBuf>,
    dataset: DatasetArgs,
    scoring: ScoringArgs,
) -> Result<()> {
    let session = Session::from_env()?;
    // Fail before touching the dataset when nobody may approve.
    session.require_approver()?;

    let path = resolve_dataset_path(dataset.dataset.as_deref())?;
    let dataset = Dataset::load(&path)?;
    let options = resolve_options(&scoring);

    let target = dataset.find_activity(&activity)?;
    let shortlist = ActivityShortlist::build(target, &dataset, &options)
        .with_context(|| format!("cannot rank candidates for '{activity}'"))?;
    let batch = approve(&session, &shortlist)?;
    let json = serde_json::to_string_pretty(&batch)?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, json + "\n")
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!(
                "Approved {} candidate(s) for {} -> {}",
                batch.candidates.len(),
                batch.activity_id,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
