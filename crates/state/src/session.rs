//! Operator session.
//!
//! A [`Session`] is an explicit value owned by the caller. It records who is
//! operating the tool and with which role; approval of a shortlist checks it.

use crate::env::{non_empty, ENV_OPERATOR, ENV_ROLE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Operator role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, may approve.
    Admin,
    /// Human resources, may approve.
    Hr,
    /// Line manager; may view shortlists only.
    Manager,
    /// Regular employee; may view shortlists only.
    Employee,
}

impl Role {
    /// Whether this role may approve shortlists.
    pub fn can_approve(self) -> bool {
        matches!(self, Role::Admin | Role::Hr)
    }

    /// Lowercase name, as accepted by `TALENTFIT_ROLE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            _ => Err(SessionError::UnknownRole {
                value: s.to_string(),
            }),
        }
    }
}

/// Session failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// The session has no operator.
    #[error("no operator is logged in (set TALENTFIT_OPERATOR and TALENTFIT_ROLE)")]
    NotLoggedIn,

    /// The operator's role may not approve shortlists.
    #[error("role '{role}' may not approve shortlists")]
    Forbidden {
        /// Role of the current operator.
        role: Role,
    },

    /// Role text did not name a known role.
    #[error("unknown role '{value}' (expected admin, hr, manager or employee)")]
    UnknownRole {
        /// The rejected text.
        value: String,
    },

    /// Login was attempted with a blank operator name.
    #[error("operator name must not be empty")]
    EmptyOperator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Operator {
    name: String,
    role: Role,
}

/// Who is operating the tool, if anyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    operator: Option<Operator>,
}

impl Session {
    /// A session with nobody logged in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Log `operator` in with `role`, replacing any current operator.
    pub fn login(&mut self, operator: impl Into<String>, role: Role) -> Result<(), SessionError> {
        let name = operator.into().trim().to_string();
        if name.is_empty() {
            return Err(SessionError::EmptyOperator);
        }
        tracing::debug!(target: "talentfit::session", operator = %name, %role, "login");
        self.operator = Some(Operator { name, role });
        Ok(())
    }

    /// Clear the current operator. Logging out an anonymous session is a no-op.
    pub fn logout(&mut self) {
        if let Some(op) = self.operator.take() {
            tracing::debug!(target: "talentfit::session", operator = %op.name, "logout");
        }
    }

    /// Build a session from `TALENTFIT_OPERATOR` and `TALENTFIT_ROLE`.
    ///
    /// Missing operator gives an anonymous session. A missing role defaults
    /// to `employee`; an unrecognised role is an error.
    pub fn from_env() -> Result<Self, SessionError> {
        let mut session = Self::anonymous();
        let Some(name) = non_empty(ENV_OPERATOR) else {
            return Ok(session);
        };
        let role = match non_empty(ENV_ROLE) {
            Some(raw) => raw.parse()?,
            None => Role::Employee,
        };
        session.login(name, role)?;
        Ok(session)
    }

    /// Whether an operator is logged in.
    pub fn is_logged_in(&self) -> bool {
        self.operator.is_some()
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_ref().map(|op| op.name.as_str())
    }

    /// Role of the current operator.
    pub fn role(&self) -> Option<Role> {
        self.operator.as_ref().map(|op| op.role)
    }

    /// The operator name when the session may approve shortlists.
    pub fn require_approver(&self) -> Result<&str, SessionError> {
        let op = self.operator.as_ref().ok_or(SessionError::NotLoggedIn)?;
        if !op.role.can_approve() {
            return Err(SessionError::Forbidden { role: op.role });
        }
        Ok(&op.name)
    }
}
