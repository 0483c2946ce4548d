//! # サイト生成ツール設定
//!
//! 環境変数からページ生成ツールの設定を読み込む。

use std::{env, path::PathBuf};

/// ページ生成ツールの設定
#[derive(Debug, Clone)]
pub struct SiteGenConfig {
    /// 対応ワークフロー一覧 JSON のパス
    pub supported_workflows_path: PathBuf,
    /// ページパラメータの出力先（未設定なら標準出力）
    pub output_path:              Option<PathBuf>,
}

impl SiteGenConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # エラー
    ///
    /// `SUPPORTED_WORKFLOWS_PATH` が未設定の場合は `env::VarError` を返す。
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            supported_workflows_path: env::var("SUPPORTED_WORKFLOWS_PATH")?.into(),
            output_path:              env::var("PAGE_PARAMS_OUT").ok().map(PathBuf::from),
        })
    }
}
