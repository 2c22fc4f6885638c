//! Sentiment model: the classifier's label and its confidence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label produced by the sentiment collaborator.
///
/// Parsing never fails: anything outside the known set is kept verbatim in
/// `Other` and simply does not match any sentiment rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Mixed,
    Other(String),
}

impl SentimentLabel {
    /// Case-insensitive parse. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            "MIXED" => Self::Mixed,
            _ => Self::Other(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Mixed => "MIXED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment classification with the classifier's certainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAssessment {
    pub label: SentimentLabel,
    pub confidence: f64,
}

impl SentimentAssessment {
    pub fn new(label: impl Into<SentimentLabel>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::upper("POSITIVE", SentimentLabel::Positive)]
    #[case::lower("negative", SentimentLabel::Negative)]
    #[case::mixed_case("Neutral", SentimentLabel::Neutral)]
    #[case::padded("  MIXED ", SentimentLabel::Mixed)]
    fn parses_known_labels(#[case] raw: &str, #[case] expected: SentimentLabel) {
        assert_eq!(SentimentLabel::parse(raw), expected);
    }

    #[test]
    fn unknown_label_is_kept_verbatim() {
        let label = SentimentLabel::parse("ANGRY");
        assert_eq!(label, SentimentLabel::Other("ANGRY".to_string()));
        assert_eq!(label.as_str(), "ANGRY");
    }

    #[test]
    fn label_serializes_as_plain_string() {
        let s = serde_json::to_string(&SentimentLabel::Positive).unwrap();
        assert_eq!(s, "\"POSITIVE\"");

        let back: SentimentLabel = serde_json::from_str("\"mixed\"").unwrap();
        assert_eq!(back, SentimentLabel::Mixed);
    }
}
