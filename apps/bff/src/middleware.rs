//! # ミドルウェア
//!
//! BFF の全ルートに共通で掛けるミドルウェア。

mod cache_control;
pub mod request_id;

pub use cache_control::no_cache;
pub use request_id::{current_request_id, inject_request_id, store_request_id};
