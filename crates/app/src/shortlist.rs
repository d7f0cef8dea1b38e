//! Shortlists per activity and approved shortlist batches.

use crate::dataset::Dataset;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use talentfit_engine::{
    generate_recommendations, Activity, EngineError, RecommendationOptions, ScoredCandidate,
};
use talentfit_state::Session;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Ranked candidates for one activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityShortlist {
    pub activity_id: String,
    pub title: String,
    pub seat_count: u32,
    pub recommendations: Vec<ScoredCandidate>,
}

impl ActivityShortlist {
    pub fn build(
        activity: &Activity,
        dataset: &Dataset,
        options: &RecommendationOptions,
    ) -> Result<Self, EngineError> {
        let recommendations = generate_recommendations(activity, &dataset.candidates, options)?;
        Ok(Self {
            activity_id: activity.id.clone(),
            title: activity.title.clone(),
            seat_count: activity.seat_count,
            recommendations,
        })
    }
}

/// Shortlists for every activity, computed in parallel, in dataset order.
pub fn shortlist_all(
    dataset: &Dataset,
    options: &RecommendationOptions,
) -> Result<Vec<ActivityShortlist>, EngineError> {
    dataset
        .activities
        .par_iter()
        .map(|activity| ActivityShortlist::build(activity, dataset, options))
        .collect()
}

/// An approved shortlist, ready to hand to enrolment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortlistBatch {
    pub batch_id: Uuid,
    pub activity_id: String,
    pub approved_by: String,
    /// RFC 3339, UTC.
    pub created_at: String,
    /// Employee ids in rank order.
    pub candidates: Vec<String>,
}

/// Approve `shortlist`, keeping at most `seat_count` candidates.
///
/// The session must belong to an operator whose role may approve.
pub fn approve(session: &Session, shortlist: &ActivityShortlist) -> anyhow::Result<ShortlistBatch> {
    let approved_by = session.require_approver()?.to_string();
    let seats = usize::try_from(shortlist.seat_count).unwrap_or(usize::MAX);
    let candidates: Vec<String> = shortlist
        .recommendations
        .iter()
        .take(seats)
        .map(|s| s.employee_id().to_string())
        .collect();

    if candidates.len() < shortlist.recommendations.len() {
        tracing::debug!(
            target: "talentfit::approve",
            activity = %shortlist.activity_id,
            seats,
            dropped = shortlist.recommendations.len() - candidates.len(),
            "Capped shortlist at seat count"
        );
    }

    let batch = ShortlistBatch {
        batch_id: Uuid::new_v4(),
        activity_id: shortlist.activity_id.clone(),
        approved_by,
        created_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
        candidates,
    };

    tracing::info!(
        target: "talentfit::approve",
        batch = %batch.batch_id,
        activity = %batch.activity_id,
        approved_by = %batch.approved_by,
        size = batch.candidates.len(),
        "Approved shortlist"
    );

    Ok(batch)
}
