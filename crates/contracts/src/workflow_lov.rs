//! # ワークフロー LOV データ取得コントラクト
//!
//! リモート関数 `get-workflow-lov-data` のリクエスト/レスポンス形状を定義する。
//!
//! LOV（list-of-values）データは、ワークフローに紐づく選択肢エントリの集合を
//! フォームフィールド名でキーしたもの。フォームの select 系フィールドの
//! 選択肢をサーバ側から供給するために使う。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::{ValidationError, workflow::WorkflowId};

/// フィールド名 → 選択肢エントリ列のマッピング
///
/// キーは呼び出し側が定義するフィールド識別子。空のマッピングも有効。
/// キー順は規定されない（エントリ列の順序のみ保持される）。
pub type LovData = BTreeMap<String, Vec<LovEntry>>;

/// LOV の選択肢エントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LovEntry {
    /// 選択肢の値
    pub key:   String,
    /// 表示ラベル
    pub label: String,
    /// 呼び出し側定義の補助データ（形状は規定しない、省略可）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta:  Option<JsonValue>,
}

/// LOV データ取得リクエスト
///
/// # 使用例
///
/// ```rust
/// use cardflow_contracts::GetWorkflowLovDataRequest;
/// use serde_json::json;
///
/// let request = GetWorkflowLovDataRequest::parse(&json!({ "workflowId": "expense" })).unwrap();
/// assert_eq!(request.workflow_id.as_str(), "expense");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GetWorkflowLovDataRequest {
    pub workflow_id: WorkflowId,
}

impl GetWorkflowLovDataRequest {
    /// 検証済み識別子からリクエストを作成する
    pub fn new(workflow_id: WorkflowId) -> Self {
        Self { workflow_id }
    }

    /// JSON 値をリクエスト形状として検証する
    ///
    /// # エラー
    ///
    /// `workflowId` が欠落・文字列以外・空文字列の場合は
    /// `required-field-missing-or-empty` 種別の [`ValidationError`]
    /// （メッセージ "Workflow ID is required"）を返す。
    pub fn parse(value: &JsonValue) -> Result<Self, ValidationError> {
        let workflow_id = value
            .get("workflowId")
            .and_then(JsonValue::as_str)
            .unwrap_or("");
        Ok(Self::new(WorkflowId::new(workflow_id)?))
    }
}

/// LOV データ取得レスポンス
///
/// `workflow_id` はリクエストの値をそのまま返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GetWorkflowLovDataResponse {
    pub workflow_id: WorkflowId,
    pub lov_data:    LovData,
    pub success:     bool,
}
