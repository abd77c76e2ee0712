//! # カーソルページング
//!
//! Ecosystem API のリスティング一覧は不透明なカーソルでページングされる。
//! このモジュールは「今どのページを見ているか」を保持する純粋な状態機械で、
//! HTTP 呼び出しは持たない（呼び出し側が [`FetchRequest`] を実行して結果を戻す）。
//!
//! ## 状態
//!
//! | フィールド | 意味 |
//! |-----------|------|
//! | `collection_key` | 一覧の対象（エコシステム ID など） |
//! | `current_cursor` | 表示中のページのカーソル。`None` は先頭ページ |
//! | `cursors` | 最後に適用した結果が報告した前後のカーソル |
//!
//! ## 古い結果の破棄
//!
//! 複数のリクエストが同時に飛んでいてもよい。結果は [`CursorPager::complete`] に
//! 渡したとき、リクエスト時の `(collection_key, cursor)` が現在の組と一致する
//! 場合だけ適用される。一致しなければ [`FetchOutcome::Stale`] として捨てる。
//! 到着順は問わない。
//!
//! ```rust
//! use ecostarter_domain::pagination::{Cursor, CursorPager, FetchOutcome, PageCursors};
//!
//! let mut pager = CursorPager::new("eco-1");
//! let first = pager.request();
//!
//! let cursors = PageCursors::new(Some(Cursor::new("c2")), None);
//! assert_eq!(pager.complete(&first, cursors), FetchOutcome::Applied);
//!
//! let second = pager.advance().unwrap();
//! assert_eq!(second.cursor.as_ref().map(Cursor::as_str), Some("c2"));
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 上流が発行する不透明なページカーソル
///
/// 中身を解釈・加工してはならない。受け取った値をそのまま次のリクエストに渡す。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Cursor(String);

impl Cursor {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 一覧レスポンスの `meta.cursors`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next:     Option<Cursor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Cursor>,
}

impl PageCursors {
    pub fn new(next: Option<Cursor>, previous: Option<Cursor>) -> Self {
        Self { next, previous }
    }
}

/// 1 回分の取得パラメータ
///
/// 同じリクエストを何度実行しても同じページが返る（冪等）。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchRequest {
    pub collection_key: String,
    pub cursor:         Option<Cursor>,
}

/// [`CursorPager::complete`] の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// 現在のページの結果として適用した
    Applied,
    /// 既に別のページ・別の一覧に移っていたため捨てた
    Stale,
}

/// カーソルページングの状態機械
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPager {
    collection_key: String,
    current_cursor: Option<Cursor>,
    cursors:        PageCursors,
}

impl CursorPager {
    /// 先頭ページを指す状態で生成する
    pub fn new(collection_key: impl Into<String>) -> Self {
        Self {
            collection_key: collection_key.into(),
            current_cursor: None,
            cursors:        PageCursors::default(),
        }
    }

    pub fn collection_key(&self) -> &str {
        &self.collection_key
    }

    pub fn current_cursor(&self) -> Option<&Cursor> {
        self.current_cursor.as_ref()
    }

    /// 現在の `(collection_key, cursor)` に対応する取得リクエスト
    pub fn request(&self) -> FetchRequest {
        FetchRequest {
            collection_key: self.collection_key.clone(),
            cursor:         self.current_cursor.clone(),
        }
    }

    pub fn has_next(&self) -> bool {
        self.cursors.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.cursors.previous.is_some()
    }

    /// 次のページへ進む
    ///
    /// 直前の結果が `next` を報告していなければ何もせず `None`。
    /// 移動先の結果が適用されるまでは前後どちらにも移動できない。
    pub fn advance(&mut self) -> Option<FetchRequest> {
        let next = self.cursors.next.take()?;
        Some(self.move_to(next))
    }

    /// 前のページへ戻る
    pub fn retreat(&mut self) -> Option<FetchRequest> {
        let previous = self.cursors.previous.take()?;
        Some(self.move_to(previous))
    }

    fn move_to(&mut self, cursor: Cursor) -> FetchRequest {
        self.current_cursor = Some(cursor);
        self.cursors = PageCursors::default();
        self.request()
    }

    /// 一覧の対象を切り替える
    ///
    /// 異なるキーならカーソルと既知のカーソルを捨てて先頭ページのリクエストを返す。
    /// 同じキーなら何もしない。
    pub fn set_collection_key(&mut self, collection_key: impl Into<String>) -> Option<FetchRequest> {
        let collection_key = collection_key.into();
        if collection_key == self.collection_key {
            return None;
        }

        self.collection_key = collection_key;
        self.current_cursor = None;
        self.cursors = PageCursors::default();
        Some(self.request())
    }

    /// 取得結果を適用する
    ///
    /// `request` が現在の `(collection_key, cursor)` と一致しなければ捨てる。
    pub fn complete(&mut self, request: &FetchRequest, cursors: PageCursors) -> FetchOutcome {
        if !self.is_current(request) {
            return FetchOutcome::Stale;
        }

        self.cursors = cursors;
        FetchOutcome::Applied
    }

    /// `request` が現在のページに対するものか
    pub fn is_current(&self, request: &FetchRequest) -> bool {
        request.collection_key == self.collection_key && request.cursor == self.current_cursor
    }
}
