use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Command-line interface for the `talentfit` application.
#[derive(Debug, Parser)]
#[command(
    name = "talentfit",
    about = "Recommend employees for training activities",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Dataset location shared by every command.
#[derive(Debug, Clone, Default, Args)]
pub struct DatasetArgs {
    /// Dataset file (`.json`, `.yaml` or `.yml`); falls back to `TALENTFIT_DATASET`.
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,
}

/// Pool filter and scoring knobs.
///
/// Unset flags fall back to the matching `TALENTFIT_*` variable, then to
/// the built-in defaults.
#[derive(Debug, Clone, Default, Args)]
pub struct ScoringArgs {
    /// Shortlist length; zero or negative yields an empty shortlist.
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub top_n: Option<i64>,
    /// Minimum global score (inclusive).
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,
    /// Only consider this department (`all` for any).
    #[arg(long)]
    pub department: Option<String>,
    /// Only consider candidates with a skill containing this text.
    #[arg(long = "skill", value_name = "TEXT")]
    pub skill_query: Option<String>,
    /// Weight of the skill match factor.
    #[arg(long, value_name = "W")]
    pub skill_weight: Option<f64>,
    /// Weight of the experience factor.
    #[arg(long, value_name = "W")]
    pub experience_weight: Option<f64>,
    /// Weight of the department context factor.
    #[arg(long, value_name = "W")]
    pub context_weight: Option<f64>,
}

/// Available `talentfit` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranks candidates for one activity, or every activity with `--all`.
    Recommend {
        /// Activity id to shortlist for.
        #[arg(long, required_unless_present = "all", conflicts_with = "all")]
        activity: Option<String>,
        /// Shortlists every activity in the dataset.
        #[arg(long, default_value_t = false)]
        all: bool,
        #[command(flatten)]
        dataset: DatasetArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists activities with seat counts and requirements.
    Activities {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Checks every candidate record against the input contract.
    Validate {
        #[command(flatten)]
        dataset: DatasetArgs,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Approves the shortlist for an activity and emits a shortlist batch.
    ///
    /// Requires `TALENTFIT_OPERATOR` with an `admin` or `hr` `TALENTFIT_ROLE`.
    Approve {
        /// Activity id to approve.
        #[arg(long)]
        activity: String,
        /// Write the batch to this file instead of stdout.
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        #[command(flatten)]
        dataset: DatasetArgs,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn recommend_parses_scoring_flags() {
        let cli = Cli::try_parse_from([
            "talentfit",
            "recommend",
            "--activity",
            "a1",
            "--top-n",
            "-2",
            "--min-score",
            "70",
            "--skill",
            "react",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Recommend {
                activity,
                all,
                scoring,
                format,
                ..
            } => {
                assert_eq!(activity.as_deref(), Some("a1"));
                assert!(!all);
                assert_eq!(scoring.top_n, Some(-2));
                assert_eq!(scoring.min_score, Some(70.0));
                assert_eq!(scoring.skill_query.as_deref(), Some("react"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn recommend_requires_activity_or_all() {
        assert!(Cli::try_parse_from(["talentfit", "recommend"]).is_err());
        assert!(Cli::try_parse_from(["talentfit", "recommend", "--all"]).is_ok());
        assert!(
            Cli::try_parse_from(["talentfit", "recommend", "--all", "--activity", "a1"]).is_err()
        );
    }
}
