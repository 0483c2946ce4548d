//! # ページパラメータ生成ツール
//!
//! 対応ワークフロー一覧から、静的サイトビルドが消費するページ生成パラメータを
//! JSON 形式で出力する。静的サイトビルドの一工程として実行される。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `SUPPORTED_WORKFLOWS_PATH` | **Yes** | 対応ワークフロー一覧 JSON のパス |
//! | `PAGE_PARAMS_OUT` | No | 出力先ファイル（未設定なら標準出力） |
//! | `LOG_FORMAT` | No | ログ出力形式（`json` / `pretty`） |
//!
//! ## 使い方
//!
//! ```bash
//! SUPPORTED_WORKFLOWS_PATH=config/supported_workflows.json \
//!     cargo run --bin generate-pages -p cardflow-site-gen > pages.json
//! ```

use std::fs;

use anyhow::Context;
use cardflow_contracts::SupportedWorkflow;
use cardflow_shared::observability::{self, TracingConfig};
use cardflow_site_gen::{SiteGenConfig, workflow_page_params};

/// ページパラメータ生成のエントリーポイント
///
/// 以下の順序で実行する:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. 対応ワークフロー一覧の読み込み
/// 5. ページパラメータの算出と出力
fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    observability::init_tracing(TracingConfig::from_env("site-gen"));

    let config = SiteGenConfig::from_env()
        .context("SUPPORTED_WORKFLOWS_PATH が設定されていません")?;

    let raw = fs::read_to_string(&config.supported_workflows_path).with_context(|| {
        format!(
            "対応ワークフロー一覧の読み込みに失敗しました: {}",
            config.supported_workflows_path.display()
        )
    })?;
    let workflows: Vec<SupportedWorkflow> =
        serde_json::from_str(&raw).context("対応ワークフロー一覧のパースに失敗しました")?;

    let params = workflow_page_params(&workflows);
    tracing::info!(
        workflows = workflows.len(),
        pages = params.len(),
        "ページパラメータを算出しました"
    );

    let json = serde_json::to_string_pretty(&params)
        .context("ページパラメータのシリアライズに失敗しました")?;

    match &config.output_path {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("出力に失敗しました: {}", path.display()))?;
            tracing::info!("ページパラメータを出力しました: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
