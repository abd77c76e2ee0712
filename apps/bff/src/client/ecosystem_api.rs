//! # Ecosystem API クライアント
//!
//! BFF から Ecosystem REST API への転送を担当する。
//!
//! ## エンドポイント
//!
//! - `GET /ecosystems/{id}` - エコシステム設定
//! - `GET /ecosystems/{id}/listings?limit=&cursor=` - リスティング一覧（カーソルページング）
//! - `GET /ecosystems/{id}/listings/{listing_id}` - リスティング詳細
//!
//! 成功時のボディは加工せずに返す。リトライ・キャッシュはしない。

mod error;
mod response;

use std::time::Duration;

use async_trait::async_trait;
use ecostarter_domain::{
   ecosystem::{EcosystemId, ListingId},
   pagination::Cursor,
};
pub use error::UpstreamError;
use response::handle_response;
use serde_json::Value;

use crate::middleware::request_id::inject_request_id;

/// Ecosystem API クライアントトレイト
///
/// テストではスタブに差し替える。
#[async_trait]
pub trait EcosystemApiClient: Send + Sync {
   /// エコシステム設定を取得する
   async fn get_ecosystem(&self, ecosystem_id: &EcosystemId) -> Result<Value, UpstreamError>;

   /// リスティング一覧を 1 ページ取得する
   ///
   /// `cursor` が `None` なら先頭ページ。
   async fn list_listings(
      &self,
      ecosystem_id: &EcosystemId,
      cursor: Option<&Cursor>,
      limit: u32,
   ) -> Result<Value, UpstreamError>;

   /// リスティング詳細を取得する
   async fn get_listing(
      &self,
      ecosystem_id: &EcosystemId,
      listing_id: &ListingId,
   ) -> Result<Value, UpstreamError>;
}

/// Ecosystem API クライアント実装
#[derive(Clone)]
pub struct EcosystemApiClientImpl {
   base_url: String,
   client:   reqwest::Client,
}

impl EcosystemApiClientImpl {
   /// 新しいクライアントを作成する
   ///
   /// # 引数
   ///
   /// - `base_url`: Ecosystem API のベース URL（例: `https://api.apideck.com`）
   /// - `timeout`: 1 リクエストあたりのタイムアウト
   pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
      let client = reqwest::Client::builder().timeout(timeout).build()?;
      Ok(Self::with_client(base_url, client))
   }

   pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
      Self {
         base_url: base_url.trim_end_matches('/').to_string(),
         client,
      }
   }

   fn ecosystem_url(&self, ecosystem_id: &EcosystemId) -> String {
      format!(
         "{}/ecosystems/{}",
         self.base_url,
         urlencoding::encode(ecosystem_id.as_str())
      )
   }

   fn listings_url(&self, ecosystem_id: &EcosystemId, cursor: Option<&Cursor>, limit: u32) -> String {
      let mut url = format!("{}/listings?limit={limit}", self.ecosystem_url(ecosystem_id));
      if let Some(cursor) = cursor {
         url.push_str("&cursor=");
         url.push_str(&urlencoding::encode(cursor.as_str()));
      }
      url
   }

   fn listing_url(&self, ecosystem_id: &EcosystemId, listing_id: &ListingId) -> String {
      format!(
         "{}/listings/{}",
         self.ecosystem_url(ecosystem_id),
         urlencoding::encode(listing_id.as_str())
      )
   }

   async fn get(&self, url: &str) -> Result<reqwest::Response, UpstreamError> {
      tracing::debug!(%url, "Ecosystem API を呼び出します");
      let response = inject_request_id(self.client.get(url))
         .header(reqwest::header::CONTENT_TYPE, "application/json")
         .send()
         .await?;
      Ok(response)
   }
}

#[async_trait]
impl EcosystemApiClient for EcosystemApiClientImpl {
   #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id))]
   async fn get_ecosystem(&self, ecosystem_id: &EcosystemId) -> Result<Value, UpstreamError> {
      let response = self.get(&self.ecosystem_url(ecosystem_id)).await?;

      handle_response(
         response,
         |detail| UpstreamError::EcosystemNotFound {
            ecosystem_id: ecosystem_id.to_string(),
            detail,
         },
         "Failed to fetch ecosystem",
      )
      .await
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id, has_cursor = cursor.is_some(), limit))]
   async fn list_listings(
      &self,
      ecosystem_id: &EcosystemId,
      cursor: Option<&Cursor>,
      limit: u32,
   ) -> Result<Value, UpstreamError> {
      let response = self
         .get(&self.listings_url(ecosystem_id, cursor, limit))
         .await?;

      let body = handle_response(
         response,
         |detail| UpstreamError::ListingsNotFound {
            ecosystem_id: ecosystem_id.to_string(),
            detail,
         },
         "Failed to fetch listings",
      )
      .await?;

      let count = body
         .get("data")
         .and_then(Value::as_array)
         .map_or(0, Vec::len);
      tracing::debug!(count, "リスティング一覧を取得しました");
      Ok(body)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%ecosystem_id, %listing_id))]
   async fn get_listing(
      &self,
      ecosystem_id: &EcosystemId,
      listing_id: &ListingId,
   ) -> Result<Value, UpstreamError> {
      let response = self
         .get(&self.listing_url(ecosystem_id, listing_id))
         .await?;

      handle_response(
         response,
         |detail| UpstreamError::ListingNotFound {
            ecosystem_id: ecosystem_id.to_string(),
            listing_id: listing_id.to_string(),
            detail,
         },
         "Failed to fetch listing details",
      )
      .await
   }
}
