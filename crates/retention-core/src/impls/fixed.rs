//! Fixed collaborators: deterministic doubles for tests and demos.
//!
//! Each one counts its calls so tests can check that the pipeline invokes
//! collaborators once and does not retry.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{
    CustomerMessage, CustomerRecord, Result, RetentionError, SentimentAssessment,
};
use crate::ports::{ChurnScorer, SentimentAnalyzer};

#[derive(Debug)]
pub struct FixedChurnScorer {
    result: std::result::Result<f64, String>,
    calls: AtomicUsize,
}

impl FixedChurnScorer {
    pub fn new(probability: f64) -> Self {
        Self {
            result: Ok(probability),
            calls: AtomicUsize::new(0),
        }
    }

    /// Always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ChurnScorer for FixedChurnScorer {
    async fn score(&self, _record: &CustomerRecord) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone().map_err(RetentionError::ChurnScoring)
    }
}

#[derive(Debug)]
pub struct FixedSentimentAnalyzer {
    result: std::result::Result<SentimentAssessment, String>,
    calls: AtomicUsize,
}

impl FixedSentimentAnalyzer {
    pub fn new(assessment: SentimentAssessment) -> Self {
        Self {
            result: Ok(assessment),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            result: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SentimentAnalyzer for FixedSentimentAnalyzer {
    async fn analyze(&self, _message: &CustomerMessage) -> Result<SentimentAssessment> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.result.clone().map_err(RetentionError::SentimentAnalysis)
    }
}
