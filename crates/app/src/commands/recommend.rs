//! CLI handler for the `recommend` command.

use crate::cli::{DatasetArgs, OutputFormat, ScoringArgs};
use crate::dataset::{resolve_dataset_path, Dataset};
use crate::options::resolve_options;
use crate::shortlist::{shortlist_all, ActivityShortlist};
use anyhow::{Context, Result};
use std::fmt::Write as _;

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    activity: Option<String>,
    all: bool,
    dataset: DatasetArgs,
    scoring: ScoringArgs,
    format: OutputFormat,
) -> Result<()> {
    let path = resolve_dataset_path(dataset.dataset.as_deref())?;
    let dataset = Dataset::load(&path)?;
    let options = resolve_options(&scoring);

    let shortlists = match (activity, all) {
        (Some(id), false) => {
            let activity = dataset.find_activity(&id)?;
            vec![ActivityShortlist::build(activity, &dataset, &options)
                .with_context(|| format!("cannot rank candidates for '{id}'"))?]
        }
        _ => shortlist_all(&dataset, &options).context("cannot rank candidates")?,
    };

    if format.is_json() {
        if all {
            println!("{}", serde_json::to_string_pretty(&shortlists)?);
        } else if let Some(single) = shortlists.first() {
            println!("{}", serde_json::to_string_pretty(single)?);
        }
    } else {
        print!("{}", render_shortlists(&shortlists));
    }

    Ok(())
}

/// Text table for one or more shortlists.
pub(crate) fn render_shortlists(shortlists: &[ActivityShortlist]) -> String {
    let mut out = String::new();
    for (i, shortlist) in shortlists.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_one(&mut out, shortlist);
    }
    out
}

fn render_one(out: &mut String, shortlist: &ActivityShortlist) {
    let _ = writeln!(
        out,
        "{} ({}), {} seat{}",
        shortlist.title,
        shortlist.activity_id,
        shortlist.seat_count,
        if shortlist.seat_count == 1 { "" } else { "s" }
    );

    if shortlist.recommendations.is_empty() {
        let _ = writeln!(out, "  No candidates matched.");
        return;
    }

    let _ = writeln!(
        out,
        "  {:>2}  {:>5}  {:>5}  {:>3}  {:>3}  {:<10} {:<20} {}",
        "#", "score", "skill", "exp", "ctx", "employee", "name", "department"
    );
    for (rank, s) in shortlist.recommendations.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}  {:>5}  {:>4}%  {:>2}%  {:>3}  {:<10} {:<20} {}",
            rank + 1,
            s.score,
            s.skill_match_pct,
            s.experience_pct,
            s.context_boost,
            s.candidate.employee_id,
            s.candidate.name,
            s.candidate.department
        );
        let _ = writeln!(out, "      {}", s.explanation);
    }
}
