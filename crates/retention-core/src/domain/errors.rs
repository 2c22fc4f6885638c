//! Errors - エラー型と分類
//!
//! 推薦ロジック自体はエラーを返さない（全域関数）。
//! ここにあるのは入力の検証と外部協調者の失敗だけ。

use thiserror::Error;

/// ErrorKind は失敗の運用分類
///
/// どの種類も自動リトライはしない。判断は呼び出し側に任せる。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 呼び出し側の入力が不正
    InvalidInput,
    /// 顧客が見つからない
    NotFound,
    /// ストア・スコアラー・感情分析の失敗
    Collaborator,
    /// 設定の不備
    Configuration,
}

#[derive(Debug, Error)]
pub enum RetentionError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("customer not found: phone={0}")]
    CustomerNotFound(String),

    #[error("customer store: {0}")]
    Store(String),

    #[error("churn scoring: {0}")]
    ChurnScoring(String),

    #[error("sentiment analysis: {0}")]
    SentimentAnalysis(String),

    #[error("config: {0}")]
    Config(String),
}

impl RetentionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::CustomerNotFound(_) => ErrorKind::NotFound,
            Self::Store(_) | Self::ChurnScoring(_) | Self::SentimentAnalysis(_) => {
                ErrorKind::Collaborator
            }
            Self::Config(_) => ErrorKind::Configuration,
        }
    }
}

pub type Result<T> = std::result::Result<T, RetentionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collaborator_failures_share_a_kind() {
        assert_eq!(RetentionError::Store("x".into()).kind(), ErrorKind::Collaborator);
        assert_eq!(
            RetentionError::ChurnScoring("x".into()).kind(),
            ErrorKind::Collaborator
        );
        assert_eq!(
            RetentionError::SentimentAnalysis("x".into()).kind(),
            ErrorKind::Collaborator
        );
        assert_eq!(
            RetentionError::CustomerNotFound("555-0100".into()).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn messages_name_the_failing_side() {
        let msg = RetentionError::CustomerNotFound("555-0100".into()).to_string();
        assert!(msg.contains("555-0100"));
        let msg = RetentionError::SentimentAnalysis("timeout".into()).to_string();
        assert!(msg.starts_with("sentiment analysis"));
    }
}
