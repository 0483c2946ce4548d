//! # 静的サイトビルド用ページ列挙
//!
//! 対応ワークフローの一覧から、ワークフローごとに 1 ページを事前レンダリング
//! するためのページ生成パラメータを算出する。
//!
//! 列挙はビルドフェーズで一度だけ同期的に実行され、共有可変状態を持たない。

pub mod config;
pub mod pages;

pub use config::SiteGenConfig;
pub use pages::{WorkflowPageParams, workflow_page_params};
