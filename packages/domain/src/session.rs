//! # プレビューセッション
//!
//! `?ecosystemId=...` 付きのリンクで開かれたとき、そのエコシステムを
//! ページ遷移をまたいで覚えておく（プレビューモード）。
//!
//! 保存先は [`SessionStorage`] で差し替える。BFF では Cookie、テストではメモリ。

use std::collections::HashMap;

/// セッションに保存するキー
pub const ECOSYSTEM_SESSION_KEY: &str = "ecosystem_preview_id";

/// セッション単位のキー・バリューストア
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// メモリ上のセッションストア
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// プレビュー中のエコシステム
///
/// ```rust
/// use ecostarter_domain::session::{EcosystemSession, InMemorySessionStorage};
///
/// let mut session = EcosystemSession::new(InMemorySessionStorage::default());
/// session.initialize(Some("eco-1"));
/// assert!(session.is_preview_mode());
///
/// // 次のページではクエリがなくても覚えている
/// session.initialize(None);
/// assert_eq!(session.ecosystem_id(), Some("eco-1"));
/// ```
#[derive(Debug)]
pub struct EcosystemSession<S> {
    storage:      S,
    ecosystem_id: Option<String>,
}

impl<S: SessionStorage> EcosystemSession<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            ecosystem_id: None,
        }
    }

    /// URL パラメータとストアからエコシステム ID を決める
    ///
    /// URL パラメータがあればそれを採用して保存する。なければ保存済みの値を使う。
    pub fn initialize(&mut self, url_param: Option<&str>) {
        match url_param.map(str::trim).filter(|p| !p.is_empty()) {
            Some(param) => {
                self.storage.set(ECOSYSTEM_SESSION_KEY, param);
                self.ecosystem_id = Some(param.to_string());
            }
            None => {
                self.ecosystem_id = self
                    .storage
                    .get(ECOSYSTEM_SESSION_KEY)
                    .filter(|id| !id.is_empty());
            }
        }
    }

    pub fn ecosystem_id(&self) -> Option<&str> {
        self.ecosystem_id.as_deref()
    }

    pub fn is_preview_mode(&self) -> bool {
        self.ecosystem_id.is_some()
    }

    /// プレビューモードを終了する
    pub fn clear(&mut self) {
        self.storage.remove(ECOSYSTEM_SESSION_KEY);
        self.ecosystem_id = None;
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}
