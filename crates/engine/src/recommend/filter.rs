//! Candidate pool narrowing by score, department and skill text.

use crate::types::Candidate;
use serde::{Deserialize, Serialize};

/// Department value meaning "any department".
pub const DEPARTMENT_WILDCARD: &str = "all";

/// Predicates applied to the candidate pool. All of them must hold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolFilter {
    /// Minimum `globalScore` (inclusive).
    pub min_global_score: f64,
    /// Exact, case-sensitive department; `None`, blank or `"all"` disables it.
    #[serde(default)]
    pub department: Option<String>,
    /// Case-insensitive substring matched against skill names.
    #[serde(default)]
    pub skill_query: Option<String>,
}

impl PoolFilter {
    /// The department filter, if one is actually in effect.
    pub fn active_department(&self) -> Option<&str> {
        self.department.as_deref().filter(|d| {
            let d = d.trim();
            !d.is_empty() && !d.eq_ignore_ascii_case(DEPARTMENT_WILDCARD)
        })
    }

    /// The lower-cased skill query, if non-blank.
    pub fn active_skill_query(&self) -> Option<String> {
        self.skill_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns true if the candidate passes every predicate.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        self.accepts_with(candidate, self.active_skill_query().as_deref())
    }

    fn accepts_with(&self, candidate: &Candidate, query: Option<&str>) -> bool {
        if candidate.global_score < self.min_global_score {
            return false;
        }

        if let Some(department) = self.active_department() {
            if candidate.department != department {
                return false;
            }
        }

        match query {
            Some(q) => candidate.has_skill_containing(q),
            None => true,
        }
    }
}

/// Narrows the pool, preserving input order.
pub fn filter_candidates<'a>(
    candidates: &'a [Candidate],
    filter: &PoolFilter,
) -> Vec<&'a Candidate> {
    let query = filter.active_skill_query();
    candidates
        .iter()
        .filter(|c| filter.accepts_with(c, query.as_deref()))
        .collect()
}
