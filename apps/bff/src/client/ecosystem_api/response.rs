//! Ecosystem API レスポンスの共通ハンドリング

use ecostarter_shared::error_response::extract_message;
use serde_json::{Value, json};

use super::error::UpstreamError;

/// Ecosystem API レスポンスの共通ハンドリング
///
/// 成功時はボディを加工せずに JSON として返す。失敗時は次の順で変換する。
///
/// - 404 → `not_found`（上流のエラーボディを受け取って専用のエラーを作る）
/// - それ以外 → [`UpstreamError::Status`]。メッセージは上流の `message`、
///   なければ `error`、なければ `fallback_message`
///
/// 失敗時のボディが JSON でなければ `{"message": <理由句>}` に置き換える。
pub(super) async fn handle_response(
   response: reqwest::Response,
   not_found: impl FnOnce(Value) -> UpstreamError,
   fallback_message: &str,
) -> Result<Value, UpstreamError> {
   let status = response.status();

   if status.is_success() {
      let body = response.json::<Value>().await?;
      return Ok(body);
   }

   let reason = status.canonical_reason().unwrap_or("Unknown Status");
   let text = response.text().await.unwrap_or_default();
   let detail = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| json!({ "message": reason }));

   if status == reqwest::StatusCode::NOT_FOUND {
      return Err(not_found(detail));
   }

   let message = extract_message(&detail, &["message", "error"])
      .unwrap_or(fallback_message)
      .to_string();

   Err(UpstreamError::Status {
      status: status.as_u16(),
      message,
      detail,
   })
}
