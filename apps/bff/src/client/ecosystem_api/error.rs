//! Ecosystem API クライアントのエラー型
//!
//! 404 の表示文言は利用者にそのまま返すため英語で持つ。

use serde_json::Value;
use thiserror::Error;

/// Ecosystem API 呼び出しのエラー
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
   /// エコシステムが見つからない（`GET /ecosystems/{id}` の 404）
   #[error("Ecosystem '{ecosystem_id}' not found. Please check if the ecosystem ID is correct.")]
   EcosystemNotFound { ecosystem_id: String, detail: Value },

   /// 一覧取得でエコシステムが見つからない（slug を渡したときもここに来る）
   #[error(
      "Ecosystem '{ecosystem_id}' not found. Please check if the ecosystem ID is correct (must be the UUID, not slug)."
   )]
   ListingsNotFound { ecosystem_id: String, detail: Value },

   /// リスティングが見つからない
   #[error("Listing '{listing_id}' not found in ecosystem '{ecosystem_id}'.")]
   ListingNotFound {
      ecosystem_id: String,
      listing_id:   String,
      detail:       Value,
   },

   /// 404 以外の失敗ステータス（ステータスはそのまま返す）
   #[error("{message}")]
   Status {
      status:  u16,
      message: String,
      detail:  Value,
   },

   /// 接続失敗・タイムアウト・成功レスポンスの JSON 不正
   #[error("{0}")]
   Network(String),

   /// 予期しないエラー
   #[error("{0}")]
   Unexpected(String),
}

impl UpstreamError {
   /// 上流から受け取ったエラーボディ
   pub fn detail(&self) -> Option<&Value> {
      match self {
         Self::EcosystemNotFound { detail, .. }
         | Self::ListingsNotFound { detail, .. }
         | Self::ListingNotFound { detail, .. }
         | Self::Status { detail, .. } => Some(detail),
         Self::Network(_) | Self::Unexpected(_) => None,
      }
   }

   /// BFF の内部で起きた失敗か（上流がステータスを返していない）
   pub fn is_local(&self) -> bool {
      matches!(self, Self::Network(_) | Self::Unexpected(_))
   }
}

impl From<reqwest::Error> for UpstreamError {
   fn from(err: reqwest::Error) -> Self {
      UpstreamError::Network(err.to_string())
   }
}
