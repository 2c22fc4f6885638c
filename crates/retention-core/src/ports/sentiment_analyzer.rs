//! SentimentAnalyzer port - メッセージの感情分類

use async_trait::async_trait;

use crate::domain::{CustomerMessage, Result, SentimentAssessment};

/// SentimentAnalyzer はサニタイズ済みのメッセージを分類する
///
/// `CustomerMessage` 以外の型は受け取らないので、生の入力が
/// 外部サービスに届くことはない。
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    async fn analyze(&self, message: &CustomerMessage) -> Result<SentimentAssessment>;
}
