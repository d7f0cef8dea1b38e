//! Dataset documents: `{ activities: [...], candidates: [...] }` in JSON or YAML.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use talentfit_engine::{Activity, Candidate};
use thiserror::Error;

/// Errors produced while locating, reading or parsing a dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("no dataset given (use --dataset or set TALENTFIT_DATASET)")]
    NoPath,

    #[error("failed to read dataset {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported dataset format for {} (expected .json, .yaml or .yml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid JSON dataset {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML dataset {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("duplicate activity id '{id}'")]
    DuplicateActivity { id: String },

    #[error("activity '{id}' not found")]
    UnknownActivity { id: String },
}

/// Serialization format of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Format implied by the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Activities and the candidate pool they draw from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl Dataset {
    /// Read and parse the dataset at `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let format = DatasetFormat::from_path(path).ok_or_else(|| {
            DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(&text, format, path)?;

        tracing::debug!(
            target: "talentfit::dataset",
            path = %path.display(),
            activities = dataset.activities.len(),
            candidates = dataset.candidates.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Parse dataset text; `origin` only labels errors.
    pub fn parse(text: &str, format: DatasetFormat, origin: &Path) -> Result<Self, DatasetError> {
        let dataset: Dataset = match format {
            DatasetFormat::Json => {
                serde_json::from_str(text).map_err(|source| DatasetError::Json {
                    path: origin.to_path_buf(),
                    source,
                })?
            }
            DatasetFormat::Yaml => {
                serde_yaml::from_str(text).map_err(|source| DatasetError::Yaml {
                    path: origin.to_path_buf(),
                    source,
                })?
            }
        };
        dataset.check_activity_ids()?;
        Ok(dataset)
    }

    fn check_activity_ids(&self) -> Result<(), DatasetError> {
        let mut seen = HashSet::new();
        for activity in &self.activities {
            if !seen.insert(activity.id.as_str()) {
                return Err(DatasetError::DuplicateActivity {
                    id: activity.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// The activity with `id` (exact match).
    pub fn find_activity(&self, id: &str) -> Result<&Activity, DatasetError> {
        self.activities
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DatasetError::UnknownActivity { id: id.to_string() })
    }
}

/// Resolve the dataset path: explicit argument first, then `TALENTFIT_DATASET`.
pub fn resolve_dataset_path(explicit: Option<&Path>) -> Result<PathBuf, DatasetError> {
    explicit
        .map(Path::to_path_buf)
        .or_else(talentfit_state::env_dataset)
        .ok_or(DatasetError::NoPath)
}
