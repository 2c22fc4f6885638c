//! Thresholds and incentive amounts for the decision table.

use serde::{Deserialize, Serialize};

use crate::domain::{Result, RetentionError};

/// Decision table parameters.
///
/// Every field has a default, so a partial JSON object (or `{}`) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Positive sentiment must be strictly above this to count.
    pub positive_confidence: f64,

    /// Below this a confidently positive customer gets nothing.
    pub positive_churn: f64,

    /// Negative sentiment must be strictly above this to count.
    pub negative_confidence: f64,

    /// Above this a confidently negative customer gets the maximum credit.
    pub high_churn: f64,

    /// Above this (and not above `high_churn`) the credit tier is randomized.
    pub elevated_churn: f64,

    /// Service calls strictly above this trigger the frequent-caller rule.
    ///
    /// Configurable because the documented value (4) and the deployed
    /// value (2) disagree; 2 stays the default until that is settled.
    pub service_call_threshold: u32,

    pub small_credit: u32,
    pub medium_credit: u32,
    pub max_credit: u32,

    /// Size of the free international minutes bundle.
    pub free_international_minutes: u32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            positive_confidence: 0.5,
            positive_churn: 0.5,
            negative_confidence: 0.7,
            high_churn: 0.8,
            elevated_churn: 0.4,
            service_call_threshold: 2,
            small_credit: 5,
            medium_credit: 15,
            max_credit: 25,
            free_international_minutes: 100,
        }
    }
}

impl PolicyConfig {
    /// Reject tables the recommender cannot make sense of.
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("positive_confidence", self.positive_confidence),
            ("positive_churn", self.positive_churn),
            ("negative_confidence", self.negative_confidence),
            ("high_churn", self.high_churn),
            ("elevated_churn", self.elevated_churn),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(RetentionError::Config(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.elevated_churn > self.high_churn {
            return Err(RetentionError::Config(format!(
                "elevated_churn ({}) must not exceed high_churn ({})",
                self.elevated_churn, self.high_churn
            )));
        }

        let amounts = [
            ("small_credit", self.small_credit),
            ("medium_credit", self.medium_credit),
            ("max_credit", self.max_credit),
            ("free_international_minutes", self.free_international_minutes),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, v)| *v == 0) {
            return Err(RetentionError::Config(format!("{name} must be positive")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_incentive_table() {
        let c = PolicyConfig::default();
        assert_eq!(c.positive_confidence, 0.5);
        assert_eq!(c.negative_confidence, 0.7);
        assert_eq!(c.high_churn, 0.8);
        assert_eq!(c.elevated_churn, 0.4);
        assert_eq!(c.service_call_threshold, 2);
        assert_eq!((c.small_credit, c.medium_credit, c.max_credit), (5, 15, 25));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c: PolicyConfig = serde_json::from_str(r#"{ "service_call_threshold": 4 }"#).unwrap();
        assert_eq!(c.service_call_threshold, 4);
        assert_eq!(c.max_credit, 25);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let c = PolicyConfig {
            negative_confidence: 1.5,
            ..PolicyConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("negative_confidence"));
    }

    #[test]
    fn rejects_inverted_churn_bands() {
        let c = PolicyConfig {
            elevated_churn: 0.9,
            high_churn: 0.8,
            ..PolicyConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn rejects_zero_credit() {
        let c = PolicyConfig {
            medium_credit: 0,
            ..PolicyConfig::default()
        };
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("medium_credit"));
    }
}
