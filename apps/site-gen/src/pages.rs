//! # ページ生成パラメータの算出
//!
//! 対応ワークフロー一覧をページ生成パラメータに射影する。
//! レンダリングとルーティングは外部のビルドフレームワークの責務。

use cardflow_contracts::{SupportedWorkflow, WorkflowId};
use serde::Serialize;

/// ページ生成パラメータ
///
/// 静的サイトビルドが `workflowId` でパラメータ化された URL パスに
/// 1 ページを具現化するために必要な最小データ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPageParams {
    pub workflow_id: WorkflowId,
}

/// 対応ワークフロー 1 件につき 1 つのページ生成パラメータを算出する
///
/// 入力順を保持し、フィルタも重複排除も行わない。
/// 空の入力は空の出力になる（ページ 0 件はエラーではない）。
pub fn workflow_page_params(workflows: &[SupportedWorkflow]) -> Vec<WorkflowPageParams> {
    workflows
        .iter()
        .map(|workflow| WorkflowPageParams {
            workflow_id: workflow.workflow_id.clone(),
        })
        .collect()
}
