//! # Ecostarter BFF サーバー
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │   Browser    │────▶│     BFF      │────▶│ Ecosystem REST API │
//! │              │     │  port: 3000  │     │  api.apideck.com   │
//! └──────────────┘     └──────────────┘     └────────────────────┘
//! ```
//!
//! ## 環境変数
//!
//! 設定項目は [`ecostarter_bff::config`] を参照。ログは `RUST_LOG` と `LOG_FORMAT`（`json` / `pretty`）。
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p ecostarter-bff
//!
//! ECOSYSTEM_API_URL=http://localhost:8080 LOG_FORMAT=json cargo run -p ecostarter-bff --release
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use ecostarter_bff::{
    app_builder::build_app,
    client::{EcosystemApiClient, EcosystemApiClientImpl},
    config::BffConfig,
    handler::ReadinessState,
};
use ecostarter_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env を置かず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    init_tracing(TracingConfig::from_env("bff"));
    let _tracing_guard = tracing::info_span!("app", service = "bff").entered();

    let config = BffConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        upstream = %config.ecosystem_api_url,
        listings_page_limit = config.listings_page_limit,
        "BFF サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    let ecosystem_client: Arc<dyn EcosystemApiClient> = Arc::new(
        EcosystemApiClientImpl::new(&config.ecosystem_api_url, config.upstream_timeout)
            .context("HTTP クライアントの初期化に失敗しました")?,
    );
    let readiness_state = Arc::new(ReadinessState {
        http_client:       reqwest::Client::new(),
        ecosystem_api_url: config.ecosystem_api_url.clone(),
    });

    let app = build_app(&config, ecosystem_client, readiness_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("BFF サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
