//! Interaction snapshot: everything the recommender looks at for one customer.

use serde::{Deserialize, Serialize};

use super::customer::CustomerRecord;
use super::sentiment::{SentimentAssessment, SentimentLabel};

/// A customer's current interaction snapshot.
///
/// Built once per request and never mutated. Numeric fields are not range
/// checked: a churn probability of 1.3 is accepted and compared as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionSnapshot {
    /// Minutes of daytime usage.
    pub day_mins: f64,

    pub customer_service_calls: u32,

    /// One-hot decoded from the categorical plan column.
    pub has_international_plan: bool,

    /// Score from the churn model, nominally in [0.0, 1.0].
    pub churn_probability: f64,

    pub sentiment_label: SentimentLabel,

    pub sentiment_confidence: f64,
}

impl InteractionSnapshot {
    /// Compose the three collaborator outputs into one snapshot.
    pub fn from_parts(
        record: &CustomerRecord,
        churn_probability: f64,
        sentiment: SentimentAssessment,
    ) -> Self {
        Self {
            day_mins: record.day_mins,
            customer_service_calls: record.customer_service_calls,
            has_international_plan: record.international_plan,
            churn_probability,
            sentiment_label: sentiment.label,
            sentiment_confidence: sentiment.confidence,
        }
    }
}
