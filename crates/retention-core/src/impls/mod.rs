//! Impls - ports の実装
//!
//! - **SqliteCustomerStore**: rusqlite による顧客ストア
//! - **InMemoryCustomerStore**: テスト・デモ用
//! - **LogisticChurnScorer**: 推論エンドポイントのローカル代替
//! - **KeywordSentimentAnalyzer**: 感情分析サービスのローカル代替
//! - **FixedChurnScorer / FixedSentimentAnalyzer**: 決定的なテストダブル

pub mod fixed;
pub mod keyword;
pub mod logistic;
pub mod memory;
pub mod sqlite_store;

pub use self::fixed::{FixedChurnScorer, FixedSentimentAnalyzer};
pub use self::keyword::KeywordSentimentAnalyzer;
pub use self::logistic::{ChurnModelConfig, LogisticChurnScorer};
pub use self::memory::InMemoryCustomerStore;
pub use self::sqlite_store::SqliteCustomerStore;
