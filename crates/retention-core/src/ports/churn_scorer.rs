//! ChurnScorer port - チャーン確率の推定

use async_trait::async_trait;

use crate::domain::{CustomerRecord, Result};

/// ChurnScorer は顧客レコードからチャーン確率を返す
///
/// 値は [0, 1] を想定するが、校正されている保証はない。
/// 特徴量のエンコード（one-hot など）は実装側の責務。
#[async_trait]
pub trait ChurnScorer: Send + Sync {
    async fn score(&self, record: &CustomerRecord) -> Result<f64>;
}
