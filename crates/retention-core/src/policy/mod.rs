//! Policy - インセンティブ決定ルール
//!
//! 副作用なしの純粋関数。乱数源だけは呼び出し側から注入する。

pub mod config;
pub mod recommender;

pub use self::config::PolicyConfig;
pub use self::recommender::IncentiveRecommender;
