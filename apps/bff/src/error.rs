//! # BFF エラーハンドリング
//!
//! 上流エラーとパラメータ不備を `{ "error": ..., "detail"?: ... }` のレスポンスに変換する。
//!
//! | 原因 | ステータス |
//! |------|-----------|
//! | 必須パラメータの欠落・不正 | 400 |
//! | 上流の 404 | 404（識別子入りのメッセージ） |
//! | 上流のその他の失敗 | 上流のステータスをそのまま |
//! | BFF 内の失敗（接続・デコード） | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ecostarter_shared::ErrorResponse;

use crate::client::UpstreamError;

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            UpstreamError::EcosystemNotFound { .. }
            | UpstreamError::ListingsNotFound { .. }
            | UpstreamError::ListingNotFound { .. } => {
                let message = self.to_string();
                let detail = self.detail().cloned().unwrap_or_default();
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::with_detail(message, detail),
                )
            }
            UpstreamError::Status {
                status,
                message,
                detail,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                ErrorResponse::with_detail(message, detail),
            ),
            UpstreamError::Network(ref message) | UpstreamError::Unexpected(ref message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::internal(message),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// 上流エラーをログ付きでレスポンスに変換する
///
/// BFF 内の失敗は `error`、上流が返した失敗は `warn` で出す。
pub fn log_and_convert_upstream_error(context: &str, err: UpstreamError) -> Response {
    if err.is_local() {
        tracing::error!(
            error.category = "external_service",
            error.kind = "service_communication",
            "{}で内部エラー: {}",
            context,
            err
        );
    } else {
        tracing::warn!(
            error.category = "external_service",
            error.kind = "upstream_status",
            "{}で上流がエラーを返しました: {}",
            context,
            err
        );
    }
    err.into_response()
}

/// 必須パラメータ欠落（`Missing <name> parameter`）
pub fn missing_parameter_response(name: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::missing_parameter(name)),
    )
        .into_response()
}

/// 400 Bad Request
pub fn bad_request_response(message: impl Into<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    async fn status_and_body(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_404はメッセージと上流ボディを返す() {
        let err = UpstreamError::ListingNotFound {
            ecosystem_id: "eco-1".to_string(),
            listing_id:   "l-9".to_string(),
            detail:       json!({"message": "Not Found"}),
        };

        let (status, body) = status_and_body(err.into_response()).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "error": "Listing 'l-9' not found in ecosystem 'eco-1'.",
                "detail": {"message": "Not Found"}
            })
        );
    }

    #[rstest]
    #[case(401, StatusCode::UNAUTHORIZED)]
    #[case(429, StatusCode::TOO_MANY_REQUESTS)]
    #[case(503, StatusCode::SERVICE_UNAVAILABLE)]
    #[tokio::test]
    async fn test_上流のステータスをそのまま返す(#[case] upstream: u16, #[case] expected: StatusCode) {
        let err = UpstreamError::Status {
            status:  upstream,
            message: "Upstream says no".to_string(),
            detail:  json!({"message": "Upstream says no"}),
        };

        let (status, body) = status_and_body(err.into_response()).await;

        assert_eq!(status, expected);
        assert_eq!(body["error"], "Upstream says no");
        assert_eq!(body["detail"]["message"], "Upstream says no");
    }

    #[tokio::test]
    async fn test_ローカルの失敗は500でdetailなし() {
        let err = UpstreamError::Network("error sending request".to_string());

        let (status, body) = status_and_body(err.into_response()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "error sending request"}));
    }

    #[tokio::test]
    async fn test_空メッセージの失敗は汎用メッセージになる() {
        let response = log_and_convert_upstream_error(
            "エコシステム取得",
            UpstreamError::Unexpected(String::new()),
        );

        let (status, body) = status_and_body(response).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "An error occurred");
    }

    #[tokio::test]
    async fn test_必須パラメータ欠落は400() {
        let (status, body) = status_and_body(missing_parameter_response("ecosystemId")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing ecosystemId parameter"}));
    }
}
