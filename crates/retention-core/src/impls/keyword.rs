//! KeywordSentimentAnalyzer - 感情分析サービスのローカル代替
//!
//! 手がかり語を数えるだけの素朴な分類器。オフラインのデモ用。

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{CustomerMessage, Result, SentimentAssessment, SentimentLabel};
use crate::ports::SentimentAnalyzer;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "happy", "love", "thanks", "thank", "helpful", "awesome",
    "pleased", "satisfied", "fantastic", "wonderful", "appreciate", "resolved", "fast",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "angry", "hate", "cancel", "worst", "slow", "unhappy",
    "frustrated", "disappointed", "dropped", "broken", "useless", "overcharged", "rude",
];

/// Confidence when no cue word appears.
const NEUTRAL_CONFIDENCE: f64 = 0.6;

#[derive(Debug, Clone)]
pub struct KeywordSentimentAnalyzer {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Default for KeywordSentimentAnalyzer {
    fn default() -> Self {
        Self::with_words(POSITIVE_WORDS.iter().copied(), NEGATIVE_WORDS.iter().copied())
    }
}

impl KeywordSentimentAnalyzer {
    pub fn with_words<'a>(
        positive: impl IntoIterator<Item = &'a str>,
        negative: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            positive: positive.into_iter().map(str::to_lowercase).collect(),
            negative: negative.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Classify without the async wrapper.
    pub fn classify(&self, text: &str) -> SentimentAssessment {
        let mut pos = 0u32;
        let mut neg = 0u32;
        for word in text
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|w| !w.is_empty())
        {
            let word = word.trim_matches('\'').to_lowercase();
            if self.positive.contains(&word) {
                pos += 1;
            } else if self.negative.contains(&word) {
                neg += 1;
            }
        }

        match (pos, neg) {
            (0, 0) => SentimentAssessment::new(SentimentLabel::Neutral, NEUTRAL_CONFIDENCE),
            (p, 0) => SentimentAssessment::new(SentimentLabel::Positive, saturating(p)),
            (0, n) => SentimentAssessment::new(SentimentLabel::Negative, saturating(n)),
            (p, n) => {
                let (lo, hi) = (p.min(n), p.max(n));
                let balance = f64::from(lo) / f64::from(hi);
                SentimentAssessment::new(SentimentLabel::Mixed, 0.5 + 0.5 * balance)
            }
        }
    }
}

/// 1 hit -> 0.75, 2 -> 0.875, ...
fn saturating(hits: u32) -> f64 {
    1.0 - 0.5f64.powi(hits.min(30) as i32 + 1)
}

#[async_trait]
impl SentimentAnalyzer for KeywordSentimentAnalyzer {
    async fn analyze(&self, message: &CustomerMessage) -> Result<SentimentAssessment> {
        let assessment = self.classify(message.as_str());
        debug!(
            label = %assessment.label,
            confidence = assessment.confidence,
            "keyword sentiment"
        );
        Ok(assessment)
    }
}
