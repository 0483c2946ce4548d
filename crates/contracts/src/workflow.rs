//! # ワークフロー識別子と対応ワークフロー
//!
//! ## 含まれる型
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`WorkflowId`] | ワークフロー識別子（非空文字列の値オブジェクト） |
//! | [`SupportedWorkflow`] | 対応ワークフローのレコード（定義元は外部の共有モジュール） |

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ValidationError;

/// `WorkflowId` の必須エラーメッセージ
///
/// リモート関数境界のワイヤコントラクトの一部であり、変更してはならない。
pub const WORKFLOW_ID_REQUIRED: &str = "Workflow ID is required";

/// ワークフロー識別子（値オブジェクト）
///
/// 呼び出し側が与える不透明な識別子文字列をラップする。
///
/// # 不変条件
///
/// - 空文字列ではない
/// - トリムや長さ制限は行わない（長さ 1 以上の任意の文字列をそのまま保持する）
///
/// `Deserialize` も同じ検証を通すため、実行時バリデータと導出型が
/// 乖離することはない。
///
/// # 使用例
///
/// ```rust
/// use cardflow_contracts::WorkflowId;
///
/// let id = WorkflowId::new("expense").unwrap();
/// assert_eq!(id.as_str(), "expense");
///
/// assert!(WorkflowId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[display("{_0}")]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    /// 指定した値からワークフロー識別子を作成する
    ///
    /// # エラー
    ///
    /// 空文字列の場合は `required-field-missing-or-empty` 種別の
    /// [`ValidationError`]（メッセージ [`WORKFLOW_ID_REQUIRED`]）を返す。
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::required_field(
                "workflowId",
                WORKFLOW_ID_REQUIRED,
            ));
        }
        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 所有権を持つ文字列に変換する
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for WorkflowId {
    /// 空文字列を拒否するデシリアライズ
    ///
    /// 導出型経由のデシリアライズでもスキーマと同じ判定になる。
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// 対応ワークフローのレコード
///
/// 静的サイトビルド時にページ列挙の入力となる。定義元は外部の共有モジュールで、
/// このフラグメントは `workflowId` 以外のフィールドに関知しない。
/// 未知のフィールドは `extra` にそのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedWorkflow {
    pub workflow_id: WorkflowId,
    /// このフラグメントが関知しない追加フィールド
    #[serde(flatten)]
    pub extra:       serde_json::Map<String, JsonValue>,
}
