//! # キャッシュ制御
//!
//! 転送したレスポンスをブラウザや中間プロキシに保存させない。
//! 上流が `Cache-Control` を返していても上書きする。

use axum::{
    extract::Request,
    http::{HeaderValue, header},
    middleware::Next,
    response::Response,
};

/// `Cache-Control: no-store` を付ける
pub async fn no_cache(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{self, StatusCode},
        middleware::from_fn,
        routing::get,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn test_エラーレスポンスにもno_storeを付ける() {
        let app = Router::new()
            .route(
                "/boom",
                get(|| async {
                    (
                        StatusCode::NOT_FOUND,
                        [(header::CACHE_CONTROL, "max-age=60")],
                    )
                }),
            )
            .layer(from_fn(no_cache));

        let response = app
            .oneshot(http::Request::builder().uri("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
    }
}
