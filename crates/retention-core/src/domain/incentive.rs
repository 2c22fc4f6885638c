//! Incentive model: what the recommender hands back.

use serde::{Deserialize, Serialize};

/// A retention offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Incentive {
    None,
    Credit { dollars: u32 },
    FreeInternationalMinutes { minutes: u32 },
}

impl Incentive {
    /// Stable machine label, e.g. `CREDIT_25`.
    pub fn label(&self) -> String {
        match self {
            Self::None => "NO_INCENTIVE".to_string(),
            Self::Credit { dollars } => format!("CREDIT_{dollars}"),
            Self::FreeInternationalMinutes { minutes } => format!("FREE_INTL_MINUTES_{minutes}"),
        }
    }
}

/// Which decision rule produced a recommendation.
///
/// Serialized as SCREAMING_SNAKE_CASE (`NEGATIVE_HIGH_RISK`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleId {
    /// Confident positive sentiment, churn below threshold.
    PositiveLowRisk,
    /// Confident positive sentiment, churn at or above threshold.
    PositiveElevatedRisk,
    /// Confident negative sentiment, high churn.
    NegativeHighRisk,
    /// Confident negative sentiment, elevated churn: randomized credit tier.
    NegativeExperiment,
    /// Confident negative sentiment, churn not elevated.
    NegativeLowRisk,
    /// Many service calls and no international plan.
    FrequentCaller,
    /// Nothing matched.
    Default,
}

/// The recommender's output: incentive plus a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub incentive: Incentive,
    pub label: String,
    pub description: String,
    pub rule: RuleId,
}

impl Recommendation {
    pub fn new(incentive: Incentive, rule: RuleId, description: impl Into<String>) -> Self {
        Self {
            label: incentive.label(),
            incentive,
            description: description.into(),
            rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(Incentive::None.label(), "NO_INCENTIVE");
        assert_eq!(Incentive::Credit { dollars: 25 }.label(), "CREDIT_25");
        assert_eq!(
            Incentive::FreeInternationalMinutes { minutes: 100 }.label(),
            "FREE_INTL_MINUTES_100"
        );
    }

    #[test]
    fn recommendation_json_shape() {
        let r = Recommendation::new(
            Incentive::Credit { dollars: 5 },
            RuleId::PositiveElevatedRisk,
            "engaged but at risk",
        );
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["label"], "CREDIT_5");
        assert_eq!(v["rule"], "POSITIVE_ELEVATED_RISK");
        assert_eq!(v["incentive"]["kind"], "credit");
        assert_eq!(v["incentive"]["dollars"], 5);
    }
}
