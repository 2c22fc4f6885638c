//! AdvisorBuilder - 協調者のワイヤリング
//!
//! # Fail-fast 設計
//! - store / churn_scorer / sentiment_analyzer は必須
//! - build() 時に不足とポリシーの不整合をまとめて検出する

use std::sync::Arc;

use crate::app::advisor::RetentionAdvisor;
use crate::policy::{IncentiveRecommender, PolicyConfig};
use crate::ports::{
    ChurnScorer, Clock, CustomerStore, IdGenerator, SentimentAnalyzer, SystemClock, UlidGenerator,
};

/// AdvisorBuilder は RetentionAdvisor を構築
///
/// # 使用例
/// ```ignore
/// let advisor = AdvisorBuilder::new()
///     .store(Arc::new(SqliteCustomerStore::open("customers.db")?))
///     .churn_scorer(Arc::new(LogisticChurnScorer::default()))
///     .sentiment_analyzer(Arc::new(KeywordSentimentAnalyzer::default()))
///     .build()?;
/// ```
#[derive(Default)]
pub struct AdvisorBuilder {
    store: Option<Arc<dyn CustomerStore>>,
    churn_scorer: Option<Arc<dyn ChurnScorer>>,
    sentiment_analyzer: Option<Arc<dyn SentimentAnalyzer>>,
    policy: PolicyConfig,
    clock: Option<Arc<dyn Clock>>,
}

/// BuildError は構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),
}

impl AdvisorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store<S: CustomerStore + 'static>(mut self, store: Arc<S>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn churn_scorer<C: ChurnScorer + 'static>(mut self, scorer: Arc<C>) -> Self {
        self.churn_scorer = Some(scorer);
        self
    }

    pub fn sentiment_analyzer<A: SentimentAnalyzer + 'static>(mut self, analyzer: Arc<A>) -> Self {
        self.sentiment_analyzer = Some(analyzer);
        self
    }

    pub fn policy(mut self, policy: PolicyConfig) -> Self {
        self.policy = policy;
        self
    }

    /// Defaults to [`SystemClock`]. Also drives the advice id timestamps.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn build(self) -> Result<RetentionAdvisor, BuildError> {
        let store = self
            .store
            .ok_or(BuildError::MissingCollaborator("customer store"))?;
        let churn_scorer = self
            .churn_scorer
            .ok_or(BuildError::MissingCollaborator("churn scorer"))?;
        let sentiment_analyzer = self
            .sentiment_analyzer
            .ok_or(BuildError::MissingCollaborator("sentiment analyzer"))?;

        self.policy
            .validate()
            .map_err(|e| BuildError::InvalidPolicy(e.to_string()))?;

        let clock: Arc<dyn Clock> = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let ids: Arc<dyn IdGenerator> = Arc::new(UlidGenerator::new(Arc::clone(&clock)));

        Ok(RetentionAdvisor::new(
            store,
            churn_scorer,
            sentiment_analyzer,
            IncentiveRecommender::new(self.policy),
            clock,
            ids,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SentimentAssessment, SentimentLabel};
    use crate::impls::{FixedChurnScorer, FixedSentimentAnalyzer, InMemoryCustomerStore};

    fn complete() -> AdvisorBuilder {
        AdvisorBuilder::new()
            .store(Arc::new(InMemoryCustomerStore::new()))
            .churn_scorer(Arc::new(FixedChurnScorer::new(0.1)))
            .sentiment_analyzer(Arc::new(FixedSentimentAnalyzer::new(
                SentimentAssessment::new(SentimentLabel::Neutral, 0.9),
            )))
    }

    #[test]
    fn test_build_success() {
        assert!(complete().build().is_ok());
    }

    #[test]
    fn test_build_missing_store() {
        let built = AdvisorBuilder::new()
            .churn_scorer(Arc::new(FixedChurnScorer::new(0.1)))
            .sentiment_analyzer(Arc::new(FixedSentimentAnalyzer::new(
                SentimentAssessment::new(SentimentLabel::Neutral, 0.9),
            )))
            .build();
        assert!(matches!(
            built,
            Err(BuildError::MissingCollaborator(name)) if name == "customer store"
        ));
    }

    #[test]
    fn test_build_missing_churn_scorer() {
        let built = AdvisorBuilder::new()
            .store(Arc::new(InMemoryCustomerStore::new()))
            .sentiment_analyzer(Arc::new(FixedSentimentAnalyzer::new(
                SentimentAssessment::new(SentimentLabel::Neutral, 0.9),
            )))
            .build();
        assert!(matches!(
            built,
            Err(BuildError::MissingCollaborator("churn scorer"))
        ));
    }

    #[test]
    fn test_build_missing_sentiment_analyzer() {
        let built = AdvisorBuilder::new()
            .store(Arc::new(InMemoryCustomerStore::new()))
            .churn_scorer(Arc::new(FixedChurnScorer::new(0.1)))
            .build();
        assert!(matches!(
            built,
            Err(BuildError::MissingCollaborator("sentiment analyzer"))
        ));
    }

    #[test]
    fn test_build_invalid_policy() {
        let built = complete()
            .policy(PolicyConfig {
                positive_confidence: -0.1,
                ..PolicyConfig::default()
            })
            .build();
        assert!(matches!(built, Err(BuildError::InvalidPolicy(_))));
    }
}
