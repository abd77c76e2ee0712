//! # HTTP クライアント
//!
//! - `ecosystem_api`: BFF → Ecosystem REST API の転送
//! - `proxy`: アプリ側 → BFF の呼び出し（ブラウザのデータ取得フックに相当）
//! - `listing_browser`: `proxy` を使ってリスティング一覧をページ送りする

pub mod ecosystem_api;
pub mod listing_browser;
pub mod proxy;

pub use ecosystem_api::{EcosystemApiClient, EcosystemApiClientImpl, UpstreamError};
pub use listing_browser::ListingBrowser;
pub use proxy::{FetchError, ListingsFetcher, ListingsPage, ProxyClient};
