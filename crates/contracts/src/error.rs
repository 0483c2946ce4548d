//! # バリデーションエラー定義
//!
//! スキーマ不適合を表現するエラー型。
//!
//! ## 設計方針
//!
//! - **構造化された失敗**: フィールドパスとメッセージを持ち、呼び出し側が
//!   リモート関数の境界でそのまま表面化できる
//! - **thiserror 活用**: `#[error(...)]` マクロで `std::error::Error` を自動実装
//! - **決定的**: 同一入力の再検証は常に同一の判定を返す（リトライ不要）
//!
//! すべての失敗は呼び出し側で回復可能であり、修正した入力を再送すればよい。
//! このクレートに致命的・プロセス停止級のエラーは存在しない。

use cardflow_shared::ErrorResponse;
use serde::Serialize;
use strum::IntoStaticStr;
use thiserror::Error;

/// バリデーションエラー種別
///
/// ワイヤ上では kebab-case のコード文字列で表現される。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum ValidationErrorKind {
    /// 必須フィールドが欠落しているか空文字列
    #[serde(rename = "required-field-missing-or-empty")]
    #[strum(serialize = "required-field-missing-or-empty")]
    RequiredField,
    /// ユニオンのどのバリアントにも一致しない
    #[serde(rename = "no-variant-matched")]
    #[strum(serialize = "no-variant-matched")]
    NoVariantMatched,
}

impl ValidationErrorKind {
    /// コード文字列を取得する
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// バリデーションエラー
///
/// 入力がスキーマに適合しない場合に返す。`field` は不適合が検出された
/// フィールドパス、`message` は呼び出し側にそのまま提示できるメッセージ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind:    ValidationErrorKind,
    pub field:   String,
    pub message: String,
}

impl ValidationError {
    /// 必須フィールド欠落/空のエラーを作成する
    pub fn required_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind:    ValidationErrorKind::RequiredField,
            field:   field.into(),
            message: message.into(),
        }
    }

    /// バリアント不一致のエラーを作成する
    pub fn no_variant_matched(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind:    ValidationErrorKind::NoVariantMatched,
            field:   field.into(),
            message: message.into(),
        }
    }
}

/// リモート関数境界でのエラー表面化
///
/// バリデーション失敗はハンドラロジックの実行前に 400 として返す。
impl From<ValidationError> for ErrorResponse {
    fn from(error: ValidationError) -> Self {
        ErrorResponse::validation_error(error.message)
    }
}
