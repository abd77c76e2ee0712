//! # Cookie セッションストア
//!
//! プレビュー中のエコシステム ID を Cookie に保存する [`SessionStorage`] 実装。
//! 有効期限は付けない（ブラウザを閉じれば消える）。

use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use ecostarter_domain::session::SessionStorage;

/// [`CookieJar`] を読み書きするセッションストア
///
/// 変更後の jar は [`CookieSessionStorage::into_jar`] で取り出してレスポンスに含める。
#[derive(Debug, Clone, Default)]
pub struct CookieSessionStorage {
    jar: CookieJar,
}

impl CookieSessionStorage {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl SessionStorage for CookieSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, key: &str) {
        self.jar = self.jar.clone().remove(Cookie::build(key.to_string()).path("/"));
    }
}
