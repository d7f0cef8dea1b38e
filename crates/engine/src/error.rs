//! Input-contract violations reported by the engine.

use thiserror::Error;

/// Errors surfaced when a caller breaks the engine's input contract.
///
/// Degenerate but well-formed inputs (empty pools, `top_n <= 0`, activities
/// without requirements) are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Two candidates in the pool share an employee id.
    #[error("Duplicate candidate employeeId '{employee_id}'")]
    DuplicateCandidate {
        /// The repeated id.
        employee_id: String,
    },

    /// A candidate lists the same skill twice (names compared case-insensitively).
    #[error("Candidate '{employee_id}' lists skill '{skill}' more than once")]
    DuplicateSkill {
        /// Offending candidate.
        employee_id: String,
        /// Repeated skill name.
        skill: String,
    },

    /// `globalScore` is non-finite or outside [0, 100].
    #[error("Candidate '{employee_id}' has globalScore {value} outside [0, 100]")]
    GlobalScoreOutOfRange {
        /// Offending candidate.
        employee_id: String,
        /// The rejected value.
        value: f64,
    },

    /// `yearsExperience` is negative or non-finite.
    #[error("Candidate '{employee_id}' has invalid yearsExperience {value}")]
    InvalidExperience {
        /// Offending candidate.
        employee_id: String,
        /// The rejected value.
        value: f64,
    },

    /// A scoring weight is NaN or infinite.
    #[error("Scoring weight '{name}' must be finite, got {value}")]
    NonFiniteWeight {
        /// Weight field name.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// `minGlobalScore` is NaN or infinite.
    #[error("minGlobalScore must be finite, got {value}")]
    NonFiniteMinScore {
        /// The rejected value.
        value: f64,
    },
}

impl EngineError {
    /// Whether this violation stops a recommendation run.
    ///
    /// Repeated skill names do not: the matcher scores the highest level.
    pub fn blocks_ranking(&self) -> bool {
        !matches!(self, EngineError::DuplicateSkill { .. })
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
