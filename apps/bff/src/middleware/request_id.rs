//! # Request ID の伝播
//!
//! 受け付けたリクエストの `X-Request-Id` を Ecosystem API への呼び出しにも付ける。
//!
//! 1. [`store_request_id`] が `SetRequestIdLayer` の付けた
//!    [`RequestId`](tower_http::request_id::RequestId) を task-local に置く
//! 2. クライアントは [`inject_request_id`] で送信前のリクエストにヘッダーを足す
//!
//! クライアントのトレイトに ID を引き回さずに済むよう task-local を使う。

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use ecostarter_shared::observability::REQUEST_ID_HEADER;
use tower_http::request_id::RequestId;

tokio::task_local! {
    static REQUEST_ID: String;
}

/// 処理中のリクエストの Request ID
///
/// リクエストのスコープ外（起動処理やテスト）では `None`。
pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(Clone::clone).ok()
}

/// Request ID を task-local に置いてから後続を実行する
pub async fn store_request_id(request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .and_then(|id| id.header_value().to_str().ok())
        .unwrap_or("-")
        .to_string();

    REQUEST_ID.scope(request_id, next.run(request)).await
}

/// 上流へのリクエストに `x-request-id` を付ける
///
/// スコープ外ならビルダーをそのまま返す。
pub fn inject_request_id(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    match current_request_id() {
        Some(id) => builder.header(REQUEST_ID_HEADER, id),
        None => builder,
    }
}
