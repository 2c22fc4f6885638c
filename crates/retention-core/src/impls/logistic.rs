//! LogisticChurnScorer - チャーン推論エンドポイントのローカル代替
//!
//! 特徴量のエンコード（プランの one-hot）はここで行う。
//! 係数は設定で差し替えられる。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CustomerRecord, Result, RetentionError};
use crate::ports::ChurnScorer;

/// Logistic regression coefficients over the account features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChurnModelConfig {
    pub intercept: f64,
    pub day_mins: f64,
    pub eve_mins: f64,
    pub night_mins: f64,
    pub intl_mins: f64,
    pub customer_service_calls: f64,
    pub international_plan: f64,
    pub voicemail_plan: f64,
    pub voicemail_messages: f64,
}

impl Default for ChurnModelConfig {
    fn default() -> Self {
        Self {
            intercept: -8.6,
            day_mins: 0.013,
            eve_mins: 0.0072,
            night_mins: 0.0036,
            intl_mins: 0.085,
            customer_service_calls: 0.51,
            international_plan: 2.0,
            voicemail_plan: -2.0,
            voicemail_messages: 0.035,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LogisticChurnScorer {
    model: ChurnModelConfig,
}

impl LogisticChurnScorer {
    pub fn new(model: ChurnModelConfig) -> Self {
        Self { model }
    }

    /// Linear term before the sigmoid.
    pub fn logit(&self, r: &CustomerRecord) -> f64 {
        let m = &self.model;
        m.intercept
            + m.day_mins * r.day_mins
            + m.eve_mins * r.eve_mins
            + m.night_mins * r.night_mins
            + m.intl_mins * r.intl_mins
            + m.customer_service_calls * f64::from(r.customer_service_calls)
            + m.international_plan * one_hot(r.international_plan)
            + m.voicemail_plan * one_hot(r.voicemail_plan)
            + m.voicemail_messages * f64::from(r.voicemail_messages)
    }
}

fn one_hot(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

/// Kept strictly inside (0, 1); large logits would otherwise round to 0.0 / 1.0.
fn sigmoid(z: f64) -> f64 {
    (1.0 / (1.0 + (-z).exp())).clamp(f64::EPSILON, 1.0 - f64::EPSILON)
}

#[async_trait]
impl ChurnScorer for LogisticChurnScorer {
    async fn score(&self, record: &CustomerRecord) -> Result<f64> {
        let z = self.logit(record);
        if !z.is_finite() {
            return Err(RetentionError::ChurnScoring(format!(
                "non-finite logit for phone={}",
                record.phone
            )));
        }
        let p = sigmoid(z);
        debug!(logit = z, probability = p, "logistic churn score");
        Ok(p)
    }
}
