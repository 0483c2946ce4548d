//! # カード作成コントラクト
//!
//! リモート関数 `create-card` のリクエスト/レスポンス形状は外部の共有スキーマが
//! 所有する。このクレートでは検証済み・不変の不透明な値オブジェクトとして扱い、
//! フィールドレベルの制約には関知しない。

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// カード作成リクエスト（不透明）
///
/// フィールド構成は外部の共有スキーマで検証済みのものをそのまま運ぶ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateCardRequest(JsonValue);

/// カード作成レスポンス（不透明）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateCardResponse(JsonValue);

macro_rules! opaque_value_impl {
    ($Name:ident) => {
        impl $Name {
            /// 検証済みの JSON 値からラップする
            pub fn from_value(value: JsonValue) -> Self {
                Self(value)
            }

            /// 内部の JSON 値への参照を取得する
            pub fn as_value(&self) -> &JsonValue {
                &self.0
            }

            /// 内部の JSON 値に変換する
            pub fn into_value(self) -> JsonValue {
                self.0
            }
        }
    };
}

opaque_value_impl!(CreateCardRequest);
opaque_value_impl!(CreateCardResponse);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    /// 外部共有スキーマが文書化しているフィールドに沿ったフィクスチャ
    fn create_card_fixture() -> serde_json::Value {
        json!({
            "workflowId": "expense",
            "title": "出張申請",
            "fields": { "amount": 50000 }
        })
    }

    #[test]
    fn test_リクエストはワイヤ形状を変えずに運ぶ() {
        let fixture = create_card_fixture();
        let request = CreateCardRequest::from_value(fixture.clone());

        // serde(transparent) によりラッパはワイヤ上に現れない
        assert_eq!(serde_json::to_value(&request).unwrap(), fixture);
    }

    #[test]
    fn test_リクエストのデシリアライズは任意の形状を受け入れる() {
        let request: CreateCardRequest = serde_json::from_value(create_card_fixture()).unwrap();

        assert_eq!(request.as_value()["workflowId"], "expense");
    }

    #[test]
    fn test_レスポンスのinto_valueは内部値を返す() {
        let fixture = json!({ "cardId": "card-1", "success": true });
        let response = CreateCardResponse::from_value(fixture.clone());

        assert_eq!(response.into_value(), fixture);
    }
}
