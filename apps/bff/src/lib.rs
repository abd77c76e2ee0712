//! # Ecostarter BFF ライブラリ
//!
//! Ecosystem REST API の前段に立つ BFF（Backend for Frontend）。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築
//! - `client`: Ecosystem API クライアント、BFF プロキシクライアント、一覧のページ送り
//! - `config`: 環境変数からの設定
//! - `error`: エラーレスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `middleware`: Request ID 伝播、キャッシュ制御
//! - `openapi`: OpenAPI 仕様
//! - `session`: Cookie に保存するプレビューセッション

pub mod app_builder;
pub mod client;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod openapi;
pub mod session;
