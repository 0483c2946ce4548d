//! # フォーム初期値
//!
//! フォームフィールドの初期値として許可される 4 種類の値のユニオン。
//! 一致したバリアントに対する追加制約（長さ・範囲など）は課さない。

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::ValidationError;

/// バリアント不一致のエラーメッセージ
const NO_VARIANT_MESSAGE: &str =
    "Initial value must be a string, number, boolean, or a list of strings";

/// フォームフィールドの初期値
///
/// 文字列・数値・真偽値・文字列リストのいずれか。
/// ワイヤ上ではタグなしで、値そのものの JSON 型で表現される。
///
/// # 使用例
///
/// ```rust
/// use cardflow_contracts::InitialValue;
/// use serde_json::json;
///
/// assert_eq!(
///     InitialValue::parse(&json!("draft")).unwrap(),
///     InitialValue::Text("draft".to_string())
/// );
/// assert!(InitialValue::parse(&json!({ "nested": true })).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(untagged)]
pub enum InitialValue {
    /// 文字列
    Text(String),
    /// 数値
    Number(f64),
    /// 真偽値
    Flag(bool),
    /// 文字列リスト
    TextList(Vec<String>),
}

impl InitialValue {
    /// JSON 値を初期値として検証する
    ///
    /// # エラー
    ///
    /// 4 バリアントのいずれにも一致しない場合（オブジェクト、null、
    /// 文字列以外を含む配列など）は `no-variant-matched` 種別の
    /// [`ValidationError`] を返す。
    pub fn parse(value: &JsonValue) -> Result<Self, ValidationError> {
        let no_match = || ValidationError::no_variant_matched("initialValue", NO_VARIANT_MESSAGE);

        match value {
            JsonValue::String(s) => Ok(Self::Text(s.clone())),
            JsonValue::Bool(b) => Ok(Self::Flag(*b)),
            JsonValue::Number(n) => n.as_f64().map(Self::Number).ok_or_else(no_match),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<String>>>()
                .map(Self::TextList)
                .ok_or_else(no_match),
            _ => Err(no_match()),
        }
    }
}
