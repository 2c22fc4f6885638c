//! Advice: the recorded result of one end-to-end pipeline run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::customer::Phone;
use super::ids::AdviceId;
use super::incentive::Recommendation;
use super::snapshot::InteractionSnapshot;

/// What was looked at, what was decided, and when.
///
/// Keeps the snapshot next to the recommendation so a decision can be
/// explained later without re-running the collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub id: AdviceId,
    pub phone: Phone,
    pub snapshot: InteractionSnapshot,
    pub recommendation: Recommendation,
    pub evaluated_at: DateTime<Utc>,
}
