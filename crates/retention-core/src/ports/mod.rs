//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! 各 trait は外部協調者（顧客データベース、チャーン予測エンドポイント、
//! 感情分析サービス）へのインターフェースを提供し、実装の詳細を隠蔽します。
//!
//! # 設計原則
//! - 呼び出しは同期的な request/response として扱う（await はするが並列化しない）
//! - 入力は型付きの値で渡す（生の文字列をクエリに埋め込まない）
//! - 出力は境界で一度だけデコードする
//! - 失敗は Result で返す。リトライはしない

pub mod customer_store;
pub mod churn_scorer;
pub mod sentiment_analyzer;
pub mod clock;
pub mod id_generator;

// 主要な trait を再エクスポート
pub use self::customer_store::CustomerStore;
pub use self::churn_scorer::ChurnScorer;
pub use self::sentiment_analyzer::SentimentAnalyzer;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
