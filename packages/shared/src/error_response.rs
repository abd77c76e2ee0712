//! # エラーレスポンス
//!
//! BFF が返すエラーボディ `{ "error": "...", "detail": ... }` を提供する。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - HTTP ステータスはボディに含めず、レスポンスのステータスラインで表す
//! - `detail` には上流 API のエラーボディをそのまま格納する（構造は保証しない）
//! - axum の `IntoResponse` 変換は BFF の責務（shared に axum 依存を入れない）

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// エラーメッセージが取得できなかったときの汎用メッセージ
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// BFF のエラーボディ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
   /// 利用者に表示するメッセージ
   pub error:  String,
   /// 上流から受け取った生のエラーボディ
   #[serde(default, skip_serializing_if = "Option::is_none")]
   #[cfg_attr(feature = "openapi", schema(value_type = Option<Object>))]
   pub detail: Option<Value>,
}

impl ErrorResponse {
   /// detail なしのエラーを作成する
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error:  error.into(),
         detail: None,
      }
   }

   /// 上流のエラーボディを detail に添えたエラーを作成する
   pub fn with_detail(error: impl Into<String>, detail: Value) -> Self {
      Self {
         error:  error.into(),
         detail: Some(detail),
      }
   }

   /// 必須パラメータ欠落（400）のエラーを作成する
   ///
   /// 例: `missing_parameter("ecosystemId")` → `Missing ecosystemId parameter`
   pub fn missing_parameter(name: &str) -> Self {
      Self::new(format!("Missing {name} parameter"))
   }

   /// ローカルで発生した例外（500）のエラーを作成する
   ///
   /// メッセージが空のときは [`GENERIC_ERROR_MESSAGE`] を使う。
   pub fn internal(message: &str) -> Self {
      if message.trim().is_empty() {
         Self::new(GENERIC_ERROR_MESSAGE)
      } else {
         Self::new(message)
      }
   }
}

/// JSON ボディから最初に見つかった空でない文字列フィールドを取り出す
///
/// `keys` の順に探索する。上流のエラーボディは `message` を持つものと
/// `error` を持つものが混在するため、呼び出し側で優先順位を指定する。
pub fn extract_message<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a str> {
   keys.iter()
      .filter_map(|key| body.get(*key).and_then(Value::as_str))
      .find(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use serde_json::json;

   use super::*;

   #[test]
   fn test_detailなしのときdetailキーを出力しない() {
      let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();

      assert_eq!(json, json!({ "error": "boom" }));
   }

   #[test]
   fn test_with_detailで上流ボディをそのまま保持する() {
      let upstream = json!({ "message": "Not Found", "status_code": 404 });
      let json =
         serde_json::to_value(ErrorResponse::with_detail("見つかりません", upstream.clone()))
            .unwrap();

      assert_eq!(json["error"], "見つかりません");
      assert_eq!(json["detail"], upstream);
   }

   #[test]
   fn test_missing_parameterのメッセージ形式() {
      let error = ErrorResponse::missing_parameter("ecosystemId");

      assert_eq!(error.error, "Missing ecosystemId parameter");
      assert_eq!(error.detail, None);
   }

   #[test]
   fn test_internalは空メッセージを汎用メッセージに置き換える() {
      assert_eq!(ErrorResponse::internal("").error, GENERIC_ERROR_MESSAGE);
      assert_eq!(ErrorResponse::internal("  ").error, GENERIC_ERROR_MESSAGE);
      assert_eq!(
         ErrorResponse::internal("connection refused").error,
         "connection refused"
      );
   }

   #[test]
   fn test_detailが欠けたボディもデシリアライズできる() {
      let error: ErrorResponse = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();

      assert_eq!(error, ErrorResponse::new("boom"));
   }

   #[test]
   fn test_extract_messageは指定順で最初の値を返す() {
      let body = json!({ "message": "boom", "error": "Internal" });

      assert_eq!(extract_message(&body, &["message", "error"]), Some("boom"));
      assert_eq!(extract_message(&body, &["error", "message"]), Some("Internal"));
   }

   #[test]
   fn test_extract_messageは空文字列と非文字列を読み飛ばす() {
      let body = json!({ "message": "", "error": { "code": 1 }, "title": "fallback" });

      assert_eq!(
         extract_message(&body, &["message", "error", "title"]),
         Some("fallback")
      );
      assert_eq!(extract_message(&body, &["message", "error"]), None);
      assert_eq!(extract_message(&json!("plain"), &["message"]), None);
   }
}
