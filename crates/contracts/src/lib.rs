//! # Cardflow コントラクト層
//!
//! リモート関数の形状コントラクトを定義する。
//!
//! ## 設計方針
//!
//! このクレートは 2 つのリモート関数（`create-card`, `get-workflow-lov-data`）の
//! リクエスト/レスポンス形状と、その実行時バリデーションを提供する:
//!
//! - **形状定義**: 各リモート関数が受け付けるリクエスト形状と返すレスポンス形状
//! - **導出型**: スキーマと構造的に同一な静的型（乖離は欠陥であり設計選択ではない）
//! - **バリデーションエラー**: 不適合入力を構造化して報告するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! site-gen → contracts → shared
//! ```
//!
//! コントラクト層は `shared` のみに依存し、I/O を一切行わない。
//! すべてのバリデーションは同期・純粋・決定的である。
//!
//! ## 使用例
//!
//! ```rust
//! use cardflow_contracts::GetWorkflowLovDataRequest;
//! use serde_json::json;
//!
//! let request = GetWorkflowLovDataRequest::parse(&json!({ "workflowId": "expense" })).unwrap();
//! assert_eq!(request.workflow_id.as_str(), "expense");
//!
//! let error = GetWorkflowLovDataRequest::parse(&json!({})).unwrap_err();
//! assert_eq!(error.message, "Workflow ID is required");
//! ```

pub mod create_card;
pub mod error;
pub mod initial_value;
pub mod operation;
pub mod workflow;
pub mod workflow_lov;

pub use create_card::{CreateCardRequest, CreateCardResponse};
pub use error::{ValidationError, ValidationErrorKind};
pub use initial_value::InitialValue;
pub use workflow::{SupportedWorkflow, WorkflowId};
pub use workflow_lov::{
    GetWorkflowLovDataRequest,
    GetWorkflowLovDataResponse,
    LovData,
    LovEntry,
};
