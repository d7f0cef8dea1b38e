//! CLI command handlers for the talentfit application.

mod activities;
mod approve;
mod recommend;
mod validate;

pub(crate) use activities::handle_activities_command;
pub(crate) use approve::handle_approve_command;
pub(crate) use recommend::handle_recommend_command;
pub(crate) use validate::handle_validate_command;
