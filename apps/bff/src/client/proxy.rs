//! # BFF プロキシクライアント
//!
//! BFF 自身のルート（`/api/ecosystem/...`）を呼び、型付きの値で返す。
//! ブラウザ側のデータ取得フックと同じ呼び出し方・同じエラーの組み立て方をする。
//!
//! エラーメッセージは BFF の `error`、なければ `message`、なければ操作ごとの既定文言。

use std::sync::Arc;

use async_trait::async_trait;
use ecostarter_domain::{
    ecosystem::Ecosystem,
    listing::Listing,
    pagination::{Cursor, FetchRequest, PageCursors},
};
use ecostarter_shared::{ApiResponse, PaginatedResponse, error_response::extract_message};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use thiserror::Error;

use crate::middleware::request_id::inject_request_id;

/// プロキシ呼び出しのエラー
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub message:     String,
    /// 応答がなかった（接続失敗など）ときは `None`
    pub status_code: Option<u16>,
    /// エラーボディ全体
    pub detail:      Option<Value>,
}

impl FetchError {
    fn without_status(message: impl Into<String>) -> Self {
        Self {
            message:     message.into(),
            status_code: None,
            detail:      None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::without_status(err.to_string())
    }
}

/// リスティング一覧の 1 ページ
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingsPage {
    pub listings: Vec<Listing>,
    pub cursors:  PageCursors,
}

impl From<PaginatedResponse<Listing>> for ListingsPage {
    fn from(page: PaginatedResponse<Listing>) -> Self {
        let cursors = page.meta.cursors;
        Self {
            listings: page.data,
            cursors:  PageCursors::new(
                cursors.next.map(Cursor::new),
                cursors.previous.map(Cursor::new),
            ),
        }
    }
}

/// リスティング一覧の取得元
///
/// [`ListingBrowser`](super::ListingBrowser) はこのトレイト越しに取得する。
/// テストではスタブに差し替える。
#[async_trait]
pub trait ListingsFetcher: Send + Sync {
    /// `collection_key` をエコシステム ID として 1 ページ取得する
    async fn fetch_listings(&self, request: &FetchRequest) -> Result<ListingsPage, FetchError>;
}

#[async_trait]
impl<T: ListingsFetcher + ?Sized> ListingsFetcher for Arc<T> {
    async fn fetch_listings(&self, request: &FetchRequest) -> Result<ListingsPage, FetchError> {
        (**self).fetch_listings(request).await
    }
}

/// BFF プロキシクライアント
#[derive(Clone)]
pub struct ProxyClient {
    base_url: String,
    client:   reqwest::Client,
}

impl ProxyClient {
    /// # 引数
    ///
    /// - `base_url`: BFF のベース URL（例: `http://localhost:3000`）
    pub fn new(base_url: &str) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// エコシステム設定を取得する
    #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id))]
    pub async fn fetch_ecosystem(&self, ecosystem_id: &str) -> Result<Ecosystem, FetchError> {
        let url = format!(
            "{}/api/ecosystem/{}",
            self.base_url,
            urlencoding::encode(ecosystem_id)
        );
        let body: ApiResponse<Ecosystem> = self.get_json(&url, "Failed to fetch ecosystem").await?;
        Ok(body.into_data())
    }

    /// リスティング一覧を 1 ページ取得する
    ///
    /// `limit` が `None` なら BFF の既定件数。
    #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id))]
    pub async fn fetch_listings_page(
        &self,
        ecosystem_id: &str,
        cursor: Option<&Cursor>,
        limit: Option<u32>,
    ) -> Result<ListingsPage, FetchError> {
        let mut url = format!(
            "{}/api/ecosystem/listings?ecosystemId={}",
            self.base_url,
            urlencoding::encode(ecosystem_id)
        );
        if let Some(cursor) = cursor {
            url.push_str("&cursor=");
            url.push_str(&urlencoding::encode(cursor.as_str()));
        }
        if let Some(limit) = limit {
            url.push_str(&format!("&limit={limit}"));
        }

        let body: PaginatedResponse<Listing> = self.get_json(&url, "Failed to fetch listings").await?;
        Ok(body.into())
    }

    /// リスティング詳細を取得する
    #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id, %listing_id))]
    pub async fn fetch_listing(
        &self,
        ecosystem_id: &str,
        listing_id: &str,
    ) -> Result<Listing, FetchError> {
        let url = format!(
            "{}/api/ecosystem/listings/{}?ecosystemId={}",
            self.base_url,
            urlencoding::encode(listing_id),
            urlencoding::encode(ecosystem_id)
        );
        let body: ApiResponse<Listing> = self
            .get_json(&url, "Failed to fetch listing details")
            .await?;
        Ok(body.into_data())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        fallback_message: &str,
    ) -> Result<T, FetchError> {
        let response = inject_request_id(self.client.get(url)).send().await?;
        read_json(response, fallback_message).await
    }
}

#[async_trait]
impl ListingsFetcher for ProxyClient {
    async fn fetch_listings(&self, request: &FetchRequest) -> Result<ListingsPage, FetchError> {
        self.fetch_listings_page(&request.collection_key, request.cursor.as_ref(), None)
            .await
    }
}

/// BFF のレスポンスを読む
///
/// 失敗ステータスのボディが JSON でなければ、既定文言を使い `detail` は
/// `{ "message": <ステータスの理由句> }` にする。
/// 成功ステータスのボディが読めないときはステータスなしのエラーにする。
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback_message: &str,
) -> Result<T, FetchError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let (message, detail) = match response.json::<Value>().await {
        Ok(body) => {
            let message = extract_message(&body, &["error", "message"])
                .unwrap_or(fallback_message)
                .to_string();
            (message, body)
        }
        Err(_) => {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            (fallback_message.to_string(), json!({ "message": reason }))
        }
    };

    Err(FetchError {
        message,
        status_code: Some(status.as_u16()),
        detail: Some(detail),
    })
}
