//! # リモート関数名定数
//!
//! 呼び出し側とハンドラが共有する操作名。トランスポート（HTTP、RPC など）は
//! 別レイヤの責務であり、ここでは名前だけを定義する。

/// カード作成
pub const CREATE_CARD: &str = "create-card";

/// ワークフロー LOV データ取得
pub const GET_WORKFLOW_LOV_DATA: &str = "get-workflow-lov-data";
