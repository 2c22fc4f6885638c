//! App - アプリケーション層
//!
//! ports を組み合わせて 1 顧客分のパイプラインを組み立てます。
//!
//! # 主要コンポーネント
//! - **AdvisorBuilder**: 協調者のワイヤリングと起動時検証
//! - **RetentionAdvisor**: lookup → churn → sentiment → recommend

pub mod advisor;
pub mod builder;

pub use self::advisor::{BatchEntry, RetentionAdvisor};
pub use self::builder::{AdvisorBuilder, BuildError};
