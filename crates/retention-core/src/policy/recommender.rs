//! IncentiveRecommender - snapshot からインセンティブを決める
//!
//! ルールは上から順に評価し、最初に一致したものが勝つ。
//! 感情ルールはサービスコールのルールより優先される。
//! 信頼度の閾値はすべて厳密な不等号（`>`）。

use rand::Rng;
use tracing::debug;

use super::config::PolicyConfig;
use crate::domain::{Incentive, InteractionSnapshot, Recommendation, RuleId, SentimentLabel};

/// Pure decision function over an [`InteractionSnapshot`].
///
/// No state beyond the table, no I/O, never fails. The only nondeterminism
/// is the credit tier in the negative/elevated-churn band, drawn from the
/// `rng` the caller passes in.
#[derive(Debug, Clone, Default)]
pub struct IncentiveRecommender {
    config: PolicyConfig,
}

impl IncentiveRecommender {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Pick an incentive for `snapshot`.
    ///
    /// # Arguments
    /// * `snapshot` - The customer's interaction snapshot
    /// * `rng` - Randomness for the experimental tier; seed it to make the
    ///   result reproducible
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        snapshot: &InteractionSnapshot,
        rng: &mut R,
    ) -> Recommendation {
        let c = &self.config;
        let churn = snapshot.churn_probability;
        let confidence = snapshot.sentiment_confidence;

        let recommendation = match snapshot.sentiment_label {
            SentimentLabel::Positive if confidence > c.positive_confidence => {
                if churn < c.positive_churn {
                    Recommendation::new(
                        Incentive::None,
                        RuleId::PositiveLowRisk,
                        "Happy customer at low churn risk; no incentive needed",
                    )
                } else {
                    Recommendation::new(
                        Incentive::Credit {
                            dollars: c.small_credit,
                        },
                        RuleId::PositiveElevatedRisk,
                        format!(
                            "Engaged customer at elevated churn risk; offer a ${} credit",
                            c.small_credit
                        ),
                    )
                }
            }
            SentimentLabel::Negative if confidence > c.negative_confidence => {
                if churn > c.high_churn {
                    Recommendation::new(
                        Incentive::Credit {
                            dollars: c.max_credit,
                        },
                        RuleId::NegativeHighRisk,
                        format!(
                            "Unhappy customer at high churn risk; offer the maximum ${} credit",
                            c.max_credit
                        ),
                    )
                } else if churn > c.elevated_churn {
                    let dollars = if rng.gen_bool(0.5) {
                        c.medium_credit
                    } else {
                        c.small_credit
                    };
                    Recommendation::new(
                        Incentive::Credit { dollars },
                        RuleId::NegativeExperiment,
                        format!(
                            "Unhappy customer at elevated churn risk; A/B credit tier \
                             (${} or ${}), drew ${dollars}",
                            c.medium_credit, c.small_credit
                        ),
                    )
                } else {
                    Recommendation::new(
                        Incentive::None,
                        RuleId::NegativeLowRisk,
                        "Unhappy customer but churn risk is not elevated; no incentive",
                    )
                }
            }
            _ if snapshot.customer_service_calls > c.service_call_threshold
                && !snapshot.has_international_plan =>
            {
                Recommendation::new(
                    Incentive::FreeInternationalMinutes {
                        minutes: c.free_international_minutes,
                    },
                    RuleId::FrequentCaller,
                    format!(
                        "Frequent service caller without an international plan; offer {} free \
                         international minutes",
                        c.free_international_minutes
                    ),
                )
            }
            _ => Recommendation::new(
                Incentive::None,
                RuleId::Default,
                "No rule matched; no incentive",
            ),
        };

        debug!(
            rule = ?recommendation.rule,
            label = %recommendation.label,
            sentiment = %snapshot.sentiment_label,
            confidence,
            churn,
            "incentive rule matched"
        );
        recommendation
    }

    /// Same as [`recommend`](Self::recommend) with the thread-local generator.
    pub fn recommend_with_thread_rng(&self, snapshot: &InteractionSnapshot) -> Recommendation {
        self.recommend(snapshot, &mut rand::thread_rng())
    }
}
