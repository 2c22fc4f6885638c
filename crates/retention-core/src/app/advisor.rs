//! RetentionAdvisor - 1 顧客分のパイプライン
//!
//! 1) 顧客レコードを引く
//! 2) チャーン確率を得る
//! 3) メッセージの感情を得る
//! 4) snapshot を組み立てて推薦する
//!
//! 協調者は順番に 1 回ずつ呼ぶ。失敗はそのまま返し、リトライはしない。

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::{
    Advice, CustomerMessage, InteractionSnapshot, Phone, Result, RetentionError,
};
use crate::policy::IncentiveRecommender;
use crate::ports::{ChurnScorer, Clock, CustomerStore, IdGenerator, SentimentAnalyzer};

pub struct RetentionAdvisor {
    store: Arc<dyn CustomerStore>,
    churn_scorer: Arc<dyn ChurnScorer>,
    sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
    recommender: IncentiveRecommender,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

/// Per-customer result of [`RetentionAdvisor::advise_all`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    pub phone: Phone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<Advice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RetentionAdvisor {
    /// Use [`AdvisorBuilder`](crate::app::AdvisorBuilder) unless every part is at hand.
    pub fn new(
        store: Arc<dyn CustomerStore>,
        churn_scorer: Arc<dyn ChurnScorer>,
        sentiment_analyzer: Arc<dyn SentimentAnalyzer>,
        recommender: IncentiveRecommender,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            store,
            churn_scorer,
            sentiment_analyzer,
            recommender,
            clock,
            ids,
        }
    }

    pub fn recommender(&self) -> &IncentiveRecommender {
        &self.recommender
    }

    /// Run the whole pipeline for one customer.
    #[tracing::instrument(skip_all, fields(phone = %phone))]
    pub async fn advise<R: Rng + ?Sized>(
        &self,
        phone: &Phone,
        message: &CustomerMessage,
        rng: &mut R,
    ) -> Result<Advice> {
        let record = self
            .store
            .find_by_phone(phone)
            .await
            .inspect_err(|e| warn!(error = %e, "customer lookup failed"))?
            .ok_or_else(|| RetentionError::CustomerNotFound(phone.to_string()))?;

        let churn_probability = self
            .churn_scorer
            .score(&record)
            .await
            .inspect_err(|e| warn!(error = %e, "churn scoring failed"))?;
        if !(0.0..=1.0).contains(&churn_probability) {
            warn!(churn_probability, "churn score outside [0, 1]; using as-is");
        }

        let sentiment = self
            .sentiment_analyzer
            .analyze(message)
            .await
            .inspect_err(|e| warn!(error = %e, "sentiment analysis failed"))?;
        debug!(
            churn_probability,
            sentiment = %sentiment.label,
            confidence = sentiment.confidence,
            "collaborators answered"
        );

        let snapshot = InteractionSnapshot::from_parts(&record, churn_probability, sentiment);
        let recommendation = self.recommender.recommend(&snapshot, rng);
        let advice = Advice {
            id: self.ids.generate_advice_id(),
            phone: phone.clone(),
            snapshot,
            recommendation,
            evaluated_at: self.clock.now(),
        };
        info!(
            advice_id = %advice.id,
            label = %advice.recommendation.label,
            rule = ?advice.recommendation.rule,
            "incentive recommended"
        );
        Ok(advice)
    }

    /// Advise every stored customer in phone order, one at a time.
    ///
    /// A failure for one customer is recorded in its entry and the loop
    /// moves on. Only a failure to list customers aborts the batch.
    pub async fn advise_all<R: Rng + ?Sized>(
        &self,
        message: &CustomerMessage,
        rng: &mut R,
    ) -> Result<Vec<BatchEntry>> {
        let phones = self.store.list_phones().await?;
        let mut entries = Vec::with_capacity(phones.len());
        for phone in phones {
            let entry = match self.advise(&phone, message, &mut *rng).await {
                Ok(advice) => BatchEntry {
                    phone,
                    advice: Some(advice),
                    error: None,
                },
                Err(e) => BatchEntry {
                    phone,
                    advice: None,
                    error: Some(e.to_string()),
                },
            };
            entries.push(entry);
        }
        info!(customers = entries.len(), "batch finished");
        Ok(entries)
    }
}
