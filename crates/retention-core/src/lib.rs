//! retention-core
//!
//! Core building blocks for the retention incentive advisor.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（snapshot, sentiment, incentive, customer, message, advice, ids, errors）
//! - **policy**: インセンティブ決定ルール（PolicyConfig, IncentiveRecommender）
//! - **ports**: 外部協調者の抽象化（CustomerStore, ChurnScorer, SentimentAnalyzer, Clock, IdGenerator）
//! - **impls**: ports の実装（SQLite, in-memory, ローカルモデル）
//! - **app**: ports を組み合わせたパイプライン（AdvisorBuilder, RetentionAdvisor）
//! - **config**: 設定ファイルの読み込み

pub mod domain;
pub mod policy;
pub mod ports;
pub mod impls;
pub mod app;
pub mod config;
