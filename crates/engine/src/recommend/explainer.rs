//! Generate human-readable explanations for scored candidates.

use super::matcher::{MatchResult, RequirementOutcome};

/// Summarize a requirement tally, experience and department fit.
pub fn generate_explanation(
    matched: &MatchResult,
    years_experience: f64,
    in_department: bool,
) -> String {
    let mut parts = Vec::new();

    if matched.total_units == 0 {
        parts.push("No skill requirements".to_string());
    } else {
        parts.push(format!(
            "Meets {} of {} requirements",
            matched.count(RequirementOutcome::Full),
            matched.total_units
        ));

        let partial = partial_names(matched);
        if !partial.is_empty() {
            parts.push(format!("below level: {}", partial.join(", ")));
        }
    }

    parts.push(format_experience(years_experience));

    if in_department {
        parts.push("Same department".to_string());
    }

    parts.join("; ")
}

fn partial_names(matched: &MatchResult) -> Vec<&str> {
    matched
        .details
        .iter()
        .filter(|d| d.outcome == RequirementOutcome::Partial)
        .map(|d| d.requirement.as_str())
        .collect()
}

fn format_experience(years: f64) -> String {
    if years == 1.0 {
        "1 year experience".to_string()
    } else if years.fract() == 0.0 {
        format!("{years:.0} years experience")
    } else {
        format!("{years:.1} years experience")
    }
}
